use dioxus::prelude::*;

use crate::components::NotFoundView;
use crate::posts;

/// Detail view for a single post, parameterized by slug.
///
/// The router only resolves slugs that exist, but an absent post still
/// renders the not-found state rather than an empty article.
#[component]
pub fn PostDetailView(slug: String) -> Element {
    match posts::find_by_slug(&slug) {
        Some(post) => rsx! {
            article { class: "pm-view pm-post",
                h2 { "{post.title}" }
                p { "{post.body}" }
            }
        },
        None => rsx! {
            NotFoundView {}
        },
    }
}
