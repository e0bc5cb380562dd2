//! Agent template models for `assets/templates.json`.
//!
//! A template bundles a ready-made agent configuration with a scripted
//! example conversation. Templates seed the playground editor; the user
//! then customizes a working copy of the configuration field by field.

use serde::{Deserialize, Serialize};

/// Author of a chat message.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message written by the (simulated) visitor.
    User,

    /// Message written by the (simulated) agent.
    Assistant,
}

/// A single message in a template's example conversation.
///
/// Transcripts are fixed at build time and revealed in order by the
/// simulation sequencer; they are never reordered.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// The editable agent configuration.
///
/// Seeded from a template's [`AgentTemplate::default_config`] and then
/// mutated field by field. `model` should reference a model registry id
/// and `tools` should reference tool registry ids, but nothing at this
/// layer enforces that; the code generator tolerates unknown ids.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    /// Display name emitted into the generated source.
    pub name: String,

    /// Model registry id (e.g. "gpt-4o").
    pub model: String,

    /// System instructions, embedded verbatim (escaped) into the
    /// generated source.
    pub instructions: String,

    /// Enabled tool ids. Treated as a set: ids are unique and the
    /// stored order never affects generated output.
    pub tools: Vec<String>,
}

/// A predefined agent template shown in the playground gallery.
///
/// # Example
///
/// ```json
/// {
///   "id": "customer-support",
///   "name": "Customer Support Bot",
///   "description": "Automates customer service...",
///   "category": "Support",
///   "icon": "headset",
///   "default_config": { "name": "...", "model": "gpt-4o", "instructions": "...", "tools": [] },
///   "example_messages": [ { "role": "user", "content": "..." } ]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AgentTemplate {
    /// Unique identifier, also accepted by the CLI `generate` command.
    pub id: String,

    /// Human-readable template name.
    pub name: String,

    /// Short description shown on the gallery card.
    pub description: String,

    /// Category label (Support, Analytics, ...).
    pub category: String,

    /// Icon tag for the gallery card.
    ///
    /// Defaults to empty string if not specified.
    #[serde(default)]
    pub icon: String,

    /// Configuration copied wholesale into the editor on selection.
    pub default_config: AgentConfig,

    /// Fixed conversation revealed by the chat simulation.
    pub example_messages: Vec<ChatMessage>,
}
