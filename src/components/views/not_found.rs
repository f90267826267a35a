use dioxus::prelude::*;

/// Fallback for paths outside the route table.
#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        section { class: "pm-view pm-not-found",
            h2 { "404: Page Not Found" }
            p { "The page you requested does not exist." }
        }
    }
}
