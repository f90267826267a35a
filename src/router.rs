//! Path-to-view resolution.
//!
//! The route table is a static, priority-ordered list: exact static paths
//! first (`/`, `/about`, `/posts`, `/login`, `/stats`), then the
//! parameterized `/posts/:slug`, then the Not-Found fallback. Resolution is
//! a pure function of the requested path and the current session; the only
//! "side effect" of navigation is the rendered view.

use crate::posts;
use crate::session::Session;

/// Paths that require an authenticated session.
const PROTECTED_PATHS: &[&str] = &["/stats"];

/// The view selected for a navigation event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    About,
    PostList,
    /// Detail view for a post that exists; carries the matched slug
    PostDetail { slug: String },
    Login,
    /// Protected stats view, only reachable while authenticated
    Stats,
    NotFound,
}

/// Resolve a requested path against the route table.
///
/// A protected path with an anonymous session resolves to [`View::Login`]
/// in place of the target. The path itself is untouched, so the same URL
/// resolves to the real view once the session is authenticated.
///
/// A `/posts/:slug` path whose slug is not in the post list resolves to
/// [`View::NotFound`] rather than an empty detail view.
pub fn resolve(path: &str, session: Session) -> View {
    let path = normalize(path);

    if PROTECTED_PATHS.contains(&path) && !session.is_authenticated() {
        return View::Login;
    }

    match path {
        "/" => View::Home,
        "/about" => View::About,
        "/posts" => View::PostList,
        "/login" => View::Login,
        "/stats" => View::Stats,
        _ => match path.strip_prefix("/posts/") {
            Some(slug) if !slug.is_empty() && !slug.contains('/') => {
                if posts::find_by_slug(slug).is_some() {
                    View::PostDetail {
                        slug: slug.to_string(),
                    }
                } else {
                    View::NotFound
                }
            }
            _ => View::NotFound,
        },
    }
}

/// Strip a trailing slash so `/about/` matches `/about`. The root path is
/// left alone.
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}
