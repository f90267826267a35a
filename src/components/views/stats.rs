use dioxus::prelude::*;

use crate::posts;

/// Protected stats view, only reachable while authenticated.
#[component]
pub fn StatsView() -> Element {
    let post_count = posts::POSTS.len();

    rsx! {
        section { class: "pm-view",
            h2 { "Stats View" }
            p { "{post_count} posts published" }
            p { "Session: authenticated" }
        }
    }
}
