//! # apg-protocol
//!
//! Core data models for agent-playground.
//!
//! This crate defines all shared data structures used for:
//! - Bundled asset parsing (templates, model/tool registries, page content)
//! - The playground's mutable agent configuration
//! - Chat simulation events streamed from core to the UI
//!
//! ## Modules
//!
//! - [`template_models`]: Agent templates and the editable configuration
//! - [`registry_models`]: Selectable model and tool descriptors
//! - [`simulation_models`]: Events emitted by the chat simulation sequencer
//! - [`page_models`]: Static content for the informational screens
//!
//! ## Design Principles
//!
//! - Minimal dependencies: only serde and uuid
//! - Independent compilation: no dependencies on other workspace crates

pub mod page_models;
pub mod registry_models;
pub mod simulation_models;
pub mod template_models;

// Re-export all public types for convenience
pub use page_models::*;
pub use registry_models::*;
pub use simulation_models::*;
pub use template_models::*;
