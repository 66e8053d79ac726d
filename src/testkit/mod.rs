//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`vision`] - Scripted [`VisionModel`](crate::port::VisionModel)
//!   implementations.
//! - [`domain`] - Builders for domain primitives: legs and pairs.

pub mod domain;
pub mod vision;
