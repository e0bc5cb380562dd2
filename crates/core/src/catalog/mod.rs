//! The read-only playground catalog.
//!
//! The catalog holds everything bundled at build time: agent templates,
//! the model and tool registries, and the static page content. It is
//! loaded once at startup from the embedded `assets/` files and never
//! mutated afterwards; lookups by id go through a prebuilt index.

pub mod assets;
pub mod error;

use std::collections::HashMap;

use apg_protocol::{AgentTemplate, GuidePage, HomePage, ModelOption, ToolOption};
use serde::de::DeserializeOwned;

pub use error::{CatalogError, CatalogResult};

use assets::get_asset;

/// Immutable registry of templates, models, tools, and page content.
pub struct Catalog {
    templates: Vec<AgentTemplate>,
    template_index: HashMap<String, usize>,
    models: Vec<ModelOption>,
    model_index: HashMap<String, usize>,
    tools: Vec<ToolOption>,
    tool_index: HashMap<String, usize>,
    home: HomePage,
    guide: GuidePage,
}

impl Catalog {
    /// Load and index the embedded catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if an asset is missing, does not parse,
    /// or contains duplicate ids.
    pub fn load() -> CatalogResult<Self> {
        let templates: Vec<AgentTemplate> = parse_asset("templates.json")?;
        let models: Vec<ModelOption> = parse_asset("models.json")?;
        let tools: Vec<ToolOption> = parse_asset("tools.json")?;
        let home: HomePage = parse_asset("pages/home.json")?;
        let guide: GuidePage = parse_asset("pages/getting_started.json")?;

        let template_index = index_by_id("template", templates.iter().map(|t| t.id.as_str()))?;
        let model_index = index_by_id("model", models.iter().map(|m| m.id.as_str()))?;
        let tool_index = index_by_id("tool", tools.iter().map(|t| t.id.as_str()))?;

        Ok(Self {
            templates,
            template_index,
            models,
            model_index,
            tools,
            tool_index,
            home,
            guide,
        })
    }

    /// All templates in bundled (gallery) order.
    pub fn templates(&self) -> &[AgentTemplate] {
        &self.templates
    }

    /// Look up a template by id.
    pub fn template(&self, id: &str) -> Option<&AgentTemplate> {
        self.template_index.get(id).map(|&i| &self.templates[i])
    }

    /// All model options in bundled (radio list) order.
    pub fn models(&self) -> &[ModelOption] {
        &self.models
    }

    /// Look up a model option by id.
    pub fn model(&self, id: &str) -> Option<&ModelOption> {
        self.model_index.get(id).map(|&i| &self.models[i])
    }

    /// All tool options in bundled (switch list) order.
    pub fn tools(&self) -> &[ToolOption] {
        &self.tools
    }

    /// Look up a tool option by id.
    pub fn tool(&self, id: &str) -> Option<&ToolOption> {
        self.tool_index.get(id).map(|&i| &self.tools[i])
    }

    /// Home screen content.
    pub fn home(&self) -> &HomePage {
        &self.home
    }

    /// Getting-started screen content.
    pub fn guide(&self) -> &GuidePage {
        &self.guide
    }
}

/// Parse one embedded JSON asset into the expected shape.
fn parse_asset<T: DeserializeOwned>(path: &str) -> CatalogResult<T> {
    let content = get_asset(path).ok_or_else(|| CatalogError::AssetMissing(path.to_string()))?;
    serde_json::from_str(&content).map_err(|source| CatalogError::JsonParse {
        path: path.to_string(),
        source,
    })
}

/// Build an id -> position index, rejecting duplicates.
fn index_by_id<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> CatalogResult<HashMap<String, usize>> {
    let mut index = HashMap::new();
    for (position, id) in ids.enumerate() {
        if index.insert(id.to_string(), position).is_some() {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(index)
}
