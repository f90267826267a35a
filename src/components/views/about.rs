use dioxus::prelude::*;

/// About view
#[component]
pub fn AboutView() -> Element {
    rsx! {
        section { class: "pm-view",
            h2 { "About View" }
            p { "A minimal single-page blog demo built with Dioxus." }
        }
    }
}
