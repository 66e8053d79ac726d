//! Adapters implementing the ports against real infrastructure.
//!
//! - [`http`] - inbound REST surface
//! - [`sqlite`] - Diesel/SQLite persistence
//! - [`vision`] - multimodal AI extraction backends

pub mod http;
pub mod sqlite;
pub mod vision;
