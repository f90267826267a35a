//! Static blog post content.
//!
//! Posts are backed by a static in-memory list and are not mutable at
//! runtime. Each post is identified by a unique slug used as the route
//! parameter for the detail view.

/// A single blog post.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Post {
    /// Unique string identifier, used in `/posts/:slug` routes
    pub slug: &'static str,
    /// Display title
    pub title: &'static str,
    /// Body text
    pub body: &'static str,
}

/// The full post list, in display order.
pub const POSTS: &[Post] = &[
    Post {
        slug: "first-blog-post",
        title: "First Blog Post",
        body: "Lorem ipsum dolor sit amet, consectetur adip.",
    },
    Post {
        slug: "second-blog-post",
        title: "Second Blog Post",
        body: "Lorem ipsum dolor sit amet, consectetur adip.",
    },
];

/// Look up a post by its slug.
pub fn find_by_slug(slug: &str) -> Option<&'static Post> {
    POSTS.iter().find(|post| post.slug == slug)
}
