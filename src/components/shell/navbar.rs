use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::components::{use_route, use_session};

/// Top navigation bar with route links and the login/logout control.
///
/// Links navigate by setting the path signal; the shell re-resolves the
/// view on the next render. The right-hand control is the only place the
/// session is mutated besides the login form.
#[component]
pub fn NavBar() -> Element {
    let mut path = use_route();
    let mut session = use_session();

    let current = path.read().clone();
    let authenticated = session.read().is_authenticated();

    let link_class = |target: &str| {
        if current == target {
            "pm-nav-link pm-nav-link--active"
        } else {
            "pm-nav-link"
        }
    };

    rsx! {
        header { class: "pm-navbar",
            div { class: "pm-logo",
                span { class: "pm-logo-word", "Press" }
                span { class: "pm-logo-word pm-logo-word--accent", "mark" }
            }
            nav { class: "pm-nav",
                button {
                    class: link_class("/"),
                    onclick: move |_| path.set("/".to_string()),
                    "Home"
                }
                button {
                    class: link_class("/about"),
                    onclick: move |_| path.set("/about".to_string()),
                    "About"
                }
                button {
                    class: link_class("/posts"),
                    onclick: move |_| path.set("/posts".to_string()),
                    "Posts"
                }
                button {
                    class: link_class("/stats"),
                    onclick: move |_| path.set("/stats".to_string()),
                    "Stats"
                }
            }
            div { class: "pm-navbar-right",
                if authenticated {
                    button {
                        class: "pm-btn",
                        onclick: move |_| {
                            info!("logging out");
                            let next = session.read().logout();
                            session.set(next);
                        },
                        "Logout"
                    }
                } else {
                    button {
                        class: "pm-btn",
                        onclick: move |_| path.set("/login".to_string()),
                        "Login"
                    }
                }
            }
        }
    }
}
