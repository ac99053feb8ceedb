//! Domain entities - the core business objects.

mod identity;
mod like;
mod post;
mod preference;
mod user;

pub use identity::{AuthState, Identity};
pub use like::Like;
pub use post::{Post, PostId, Visibility};
pub use preference::Preference;
pub use user::User;

#[cfg(test)]
pub(crate) use post::fixture as post_fixture;
