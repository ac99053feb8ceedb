//! SeaORM entities - one per collection.

pub mod like;
pub mod post;
pub mod preference;
pub mod user;
