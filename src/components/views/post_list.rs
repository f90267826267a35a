use dioxus::prelude::*;

use crate::components::use_route;
use crate::posts;

/// Blog listing: every post title links to its detail view.
#[component]
pub fn PostListView() -> Element {
    let mut path = use_route();

    rsx! {
        section { class: "pm-view",
            h2 { "Blog" }
            ul { class: "pm-post-list",
                for post in posts::POSTS {
                    li { key: "{post.slug}",
                        button {
                            class: "pm-post-link",
                            onclick: move |_| path.set(format!("/posts/{}", post.slug)),
                            "{post.title}"
                        }
                    }
                }
            }
        }
    }
}
