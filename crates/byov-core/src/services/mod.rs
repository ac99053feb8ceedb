//! Application services built on the ports.

pub mod feed;
pub mod home;
pub mod likes;
pub mod navigation;
pub mod posts;
pub mod preview;
pub mod theme;

#[cfg(test)]
pub(crate) mod testing;

pub use feed::{FeedAssembler, FeedConfig, FeedState, ReconcileReport};
pub use home::{FeedView, HomePage};
pub use likes::{LikeService, LikeStatus};
pub use navigation::{NavItem, NavLayout, NavLink, NavMenu, nav_menu, search_location};
pub use posts::{AuthorSummary, NewVerse, PostService, VersePatch};
pub use preview::PostPreview;
pub use theme::{Theme, ThemePreferences};
