//! One component per resolvable view.

mod about;
mod home;
mod login;
mod not_found;
mod post_detail;
mod post_list;
mod stats;

pub use about::AboutView;
pub use home::HomeView;
pub use login::LoginView;
pub use not_found::NotFoundView;
pub use post_detail::PostDetailView;
pub use post_list::PostListView;
pub use stats::StatsView;
