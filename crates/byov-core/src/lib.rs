//! # BYOV Core
//!
//! The domain layer of BYOV, a small verse publishing service.
//! This crate contains the business rules (visibility, feed assembly,
//! like-count reconciliation, navigation) with no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
