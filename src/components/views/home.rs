use dioxus::prelude::*;

/// Landing view
#[component]
pub fn HomeView() -> Element {
    rsx! {
        section { class: "pm-view",
            h2 { "Home View" }
            p { "Welcome to the Pressmark demo blog." }
        }
    }
}
