//! # BYOV Shared
//!
//! Request and response bodies exchanged with the BYOV API.
//! Kept free of server dependencies so a client can compile against it.

pub mod dto;
pub mod response;

pub use dto::DtoError;
pub use response::{ApiResponse, ErrorResponse};
