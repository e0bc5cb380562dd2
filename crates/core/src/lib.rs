//! # apg-core
//!
//! Core logic for agent-playground.
//!
//! This crate provides:
//! - Catalog loading from embedded `assets/` data
//! - The mutable agent configuration editor
//! - TypeScript source generation from a configuration
//! - The chat simulation sequencer
//! - The contact wizard state machine
//!
//! ## Modules
//!
//! - [`catalog`]: Embedded template/registry/page data
//! - [`editor`]: Configuration state holder
//! - [`codegen`]: Configuration to source-text generator
//! - [`simulation`]: Timer-driven transcript reveal
//! - [`contact`]: Three-step contact wizard
//! - [`settings`]: Optional `playground.toml` overrides

pub mod catalog;
pub mod codegen;
pub mod contact;
pub mod editor;
pub mod settings;
pub mod simulation;
