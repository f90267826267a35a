//! UI components for the Pressmark application.
//!
//! This module contains all Dioxus components that make up the user
//! interface.
//!
//! - `shell`: NavBar and Footer, the persistent chrome around the content
//! - `views`: one component per resolvable view (Home, About, PostList,
//!   PostDetail, Login, Stats, NotFound)
//!
//! # Context Providers
//!
//! Components use Dioxus context for shared state:
//!
//! ```ignore
//! // Current session state from any component
//! let session = use_session();
//!
//! // Requested path; setting it navigates
//! let mut path = use_route();
//! path.set("/posts".to_string());
//! ```

mod shell;
mod views;

pub use shell::{Footer, NavBar};
pub use views::{
    AboutView, HomeView, LoginView, NotFoundView, PostDetailView, PostListView, StatsView,
};

use dioxus::prelude::*;

use crate::router::{resolve, View};
use crate::session::Session;

#[cfg(target_arch = "wasm32")]
use crate::vitals::{self, Metric, MetricHandler};
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::info;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

/// Session context provider. The session is the sole gate for protected
/// routes and is only mutated by the login and logout actions.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Current-path context provider. Setting the signal is a navigation event.
pub fn use_route() -> Signal<String> {
    use_context::<Signal<String>>()
}

/// Application root: provides session and path state, resolves the current
/// view, and composes the shell around it.
#[component]
pub fn App(initial_path: Option<String>) -> Element {
    let session = use_signal(Session::default);
    use_context_provider(|| session);

    let path = use_signal(move || initial_path.unwrap_or_else(|| "/".to_string()));
    use_context_provider(|| path);

    // Register web-vitals reporting once on startup (browser only). The
    // handler just logs each entry; failures inside the reporter are
    // swallowed and logged there.
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        spawn(async move {
            let handler: MetricHandler = Rc::new(|metric: Metric| {
                info!(
                    "web vital {}: {:.2} (delta {:.2}, id {})",
                    metric.name, metric.value, metric.delta, metric.id
                );
            });
            vitals::report_web_vitals(Some(handler)).await;
        });
    });

    // Route resolution is pure: the rendered view is a function of the
    // requested path and the session, nothing else.
    let view = resolve(&path.read(), *session.read());
    let content = match view {
        View::Home => rsx! { HomeView {} },
        View::About => rsx! { AboutView {} },
        View::PostList => rsx! { PostListView {} },
        View::PostDetail { slug } => rsx! { PostDetailView { slug } },
        View::Login => rsx! { LoginView {} },
        View::Stats => rsx! { StatsView {} },
        View::NotFound => rsx! { NotFoundView {} },
    };

    rsx! {
        div { class: "pm-app",
            NavBar {}
            main { class: "pm-main", {content} }
            Footer {}
        }
    }
}
