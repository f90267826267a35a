//! App shell components: NavBar, Footer
//!
//! These components form the persistent UI framework around the main
//! content area.

mod footer;
mod navbar;

pub use footer::Footer;
pub use navbar::NavBar;
