//! TypeScript source generation for the code preview pane.
//!
//! [`generate`] is a pure function from a configuration plus the two
//! registries to a source-text string. It runs synchronously on every
//! edit, has no side effects, and is idempotent: the same inputs always
//! produce byte-identical output.

use apg_protocol::{AgentConfig, ModelOption, ToolOption};

/// SDK name used when the configured model id is not in the registry.
const DEFAULT_SDK: &str = "openai";

/// Import path paired with [`DEFAULT_SDK`].
const DEFAULT_IMPORT_PATH: &str = "@ai-sdk/openai";

/// Derive the emitted variable name for a tool id.
///
/// Hyphens become underscores and a fixed `Tool` suffix is appended,
/// e.g. `web-search` -> `web_searchTool`.
pub fn tool_var_name(id: &str) -> String {
    format!("{}Tool", id.replace('-', "_"))
}

/// Escape text for embedding inside a template literal.
///
/// Backslashes are escaped first, then backticks, then dollar signs;
/// the order guarantees characters introduced by an earlier step are
/// never escaped again.
fn escape_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace('$', "\\$")
}

/// Generate the TypeScript source preview for a configuration.
///
/// Resolution rules:
/// - An unknown `config.model` falls back silently to the default
///   openai SDK; the raw id is still emitted in the model call.
/// - Selected tools are emitted in *registry* order, so selection
///   order never affects output. Unknown tool ids are skipped.
/// - Tool imports and the `tools:` property appear only when at least
///   one tool is selected; otherwise the property is omitted entirely.
pub fn generate(config: &AgentConfig, models: &[ModelOption], tools: &[ToolOption]) -> String {
    let (sdk, import_from) = models
        .iter()
        .find(|m| m.id == config.model)
        .map(|m| (m.sdk.as_str(), m.import_from.as_str()))
        .unwrap_or((DEFAULT_SDK, DEFAULT_IMPORT_PATH));
    let model_call = format!("{sdk}('{}')", config.model);

    let selected: Vec<&ToolOption> = tools
        .iter()
        .filter(|t| config.tools.iter().any(|id| *id == t.id))
        .collect();

    let tool_import = if selected.is_empty() {
        String::new()
    } else {
        "\nimport { createTool } from '@mastra/core/tools';".to_string()
    };
    let zod_import = if selected.is_empty() {
        String::new()
    } else {
        "\nimport { z } from 'zod';".to_string()
    };

    let tool_definitions = selected
        .iter()
        .map(|tool| tool_definition(tool))
        .collect::<Vec<_>>()
        .join("\n");

    let tools_object = if selected.is_empty() {
        String::new()
    } else {
        let names = selected
            .iter()
            .map(|t| tool_var_name(&t.id))
            .collect::<Vec<_>>()
            .join(", ");
        format!("\n  tools: {{ {names} }},")
    };

    let instructions = escape_template_literal(&config.instructions);

    format!(
        "import {{ {sdk} }} from '{import_from}';\n\
         import {{ Agent }} from '@mastra/core/agent';{tool_import}{zod_import}\n\
         {tool_definitions}\n\
         const agent = new Agent({{\n\
         \x20 name: '{name}',\n\
         \x20 instructions: `{instructions}`,\n\
         \x20 model: {model_call},{tools_object}\n\
         }});\n\
         \n\
         // Run\n\
         const result = await agent.generate('User message');\n\
         console.log(result.text);",
        name = config.name,
    )
}

/// Emit one `createTool` block for a selected tool.
fn tool_definition(tool: &ToolOption) -> String {
    format!(
        "\n\
         const {var_name} = createTool({{\n\
         \x20 id: '{id}',\n\
         \x20 description: '{description}',\n\
         \x20 inputSchema: z.object({{\n\
         \x20   query: z.string().describe('Query to execute'),\n\
         \x20 }}),\n\
         \x20 execute: async ({{ context }}) => {{\n\
         \x20   // {label} implementation\n\
         \x20   return {{ result: context.query }};\n\
         \x20 }},\n\
         }});",
        var_name = tool_var_name(&tool.id),
        id = tool.id,
        description = tool.description,
        label = tool.label,
    )
}
