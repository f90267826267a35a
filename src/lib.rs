//! Pressmark - Client-side blog demo application.
//!
//! A single-page blog/demo application that runs entirely in the client:
//! a navigation shell mapping URL paths to views, a login-gated stats
//! view backed by in-memory session state, and a web-vitals reporting
//! helper that forwards a caller-supplied callback to the browser's
//! performance measurement library.
//!
//! # Architecture
//!
//! - **Routing**: a pure `(path, session) -> View` resolution function
//!   over a static, priority-ordered route table
//! - **Session**: explicit two-state model (`Anonymous` / `Authenticated`)
//!   held in a Dioxus signal, mutated only by login and logout
//! - **Posts**: static in-memory list, looked up by slug
//! - **Vitals**: optional callback fanned out to five measurement
//!   registrations (CLS, FID, FCP, LCP, TTFB), with acquisition failures
//!   swallowed and logged
//!
//! # Platform Support
//!
//! - **Web (WASM)**: primary target; vitals reporting is browser-only
//! - **Desktop**: renders the same shell without vitals registration

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod components;
pub mod error;
pub mod posts;
pub mod router;
pub mod session;
pub mod vitals;
