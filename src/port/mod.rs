//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the extension points adapters implement to integrate
//! with external systems.
//!
//! # Available Ports
//!
//! - [`BetStore`] - Persistence for bet legs
//! - [`VisionModel`] - Multimodal AI extraction backend

mod store;
mod vision;

pub use store::BetStore;
pub use vision::{SlipImage, VisionModel};
