use dioxus::prelude::*;

/// Footer with demo messaging
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "pm-footer",
            span { class: "pm-footer-text",
                "Pressmark demo • Everything runs in your browser, nothing is persisted."
            }
        }
    }
}
