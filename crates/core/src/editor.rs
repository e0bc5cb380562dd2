//! Configuration state holder for the playground editor.
//!
//! `ConfigEditor` owns the single mutable [`AgentConfig`] for the
//! active view. Field setters replace one field at a time; selecting a
//! template replaces the whole record atomically, so no field from a
//! previously selected template can leak into the next one.
//!
//! No validation happens here: any string is accepted for name and
//! instructions, and any id for model and tools. The code generator is
//! responsible for tolerating unknown ids.

use apg_protocol::{AgentConfig, AgentTemplate};

/// Owns and mutates the active agent configuration.
#[derive(Debug, Clone)]
pub struct ConfigEditor {
    config: AgentConfig,
}

impl Default for ConfigEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigEditor {
    /// Create an editor with the blank pre-selection configuration.
    pub fn new() -> Self {
        Self {
            config: AgentConfig {
                name: String::new(),
                model: "gpt-4o".to_string(),
                instructions: String::new(),
                tools: Vec::new(),
            },
        }
    }

    /// The current configuration.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Replace the whole configuration with a copy of the template's
    /// defaults. Never a partial merge.
    pub fn seed(&mut self, template: &AgentTemplate) {
        self.config = template.default_config.clone();
    }

    /// Replace the agent name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.config.name = name.into();
    }

    /// Replace the model id.
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.config.model = model.into();
    }

    /// Replace the system instructions.
    pub fn set_instructions(&mut self, instructions: impl Into<String>) {
        self.config.instructions = instructions.into();
    }

    /// Toggle a tool id: add it if absent, remove it if present.
    ///
    /// The tools list behaves as a set; toggling twice restores the
    /// previous state.
    pub fn toggle_tool(&mut self, id: &str) {
        if let Some(position) = self.config.tools.iter().position(|t| t == id) {
            self.config.tools.remove(position);
        } else {
            self.config.tools.push(id.to_string());
        }
    }

    /// Whether a tool id is currently enabled.
    pub fn tool_enabled(&self, id: &str) -> bool {
        self.config.tools.iter().any(|t| t == id)
    }
}
