//! Model and tool registry models.
//!
//! Registries are small, fixed tables bundled at build time
//! (`assets/models.json`, `assets/tools.json`). The playground only
//! ever reads them; configurations reference entries by id.

use serde::{Deserialize, Serialize};

/// A selectable LLM backing a generated agent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ModelOption {
    /// Model id referenced by [`crate::AgentConfig::model`].
    pub id: String,

    /// Display label for the model radio list.
    pub label: String,

    /// SDK function name emitted into generated source (e.g. "openai").
    pub sdk: String,

    /// Import path for the SDK function (e.g. "@ai-sdk/openai").
    pub import_from: String,
}

/// A selectable capability an agent can be given.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ToolOption {
    /// Tool id referenced by [`crate::AgentConfig::tools`].
    pub id: String,

    /// Display label for the tool switch.
    pub label: String,

    /// One-line description, also emitted into the generated tool stub.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_option_field_names() {
        let json = r#"{ "id": "gpt-4o", "label": "GPT-4o", "sdk": "openai", "import_from": "@ai-sdk/openai" }"#;
        let model: ModelOption = serde_json::from_str(json).unwrap();
        assert_eq!(model.sdk, "openai");
        assert_eq!(model.import_from, "@ai-sdk/openai");
    }

    #[test]
    fn test_tool_option_roundtrip() {
        let tool = ToolOption {
            id: "web-search".to_string(),
            label: "Web Search".to_string(),
            description: "Searches the web".to_string(),
        };
        let json = serde_json::to_string(&tool).unwrap();
        let back: ToolOption = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tool);
    }
}
