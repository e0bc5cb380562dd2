//! Embedded data files for the playground catalog.
//!
//! This module uses `rust-embed` to embed the repository root `assets/`
//! directory into the binary at compile time, so the playground runs
//! without any external data files.

use rust_embed::RustEmbed;

/// Embedded data files from the `assets/` directory.
///
/// The path is calculated relative to the crate root:
/// - `CARGO_MANIFEST_DIR` = `crates/core`
/// - `../../assets` = repository root `assets/`
///
/// With the `debug-embed` feature, files are read from the filesystem
/// at runtime during development, allowing edits without recompilation.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../assets"]
pub struct BundledAssets;

/// Get an embedded asset by path relative to the assets root
/// (e.g. `"models.json"`, `"pages/home.json"`), decoded as UTF-8.
pub fn get_asset(path: &str) -> Option<String> {
    BundledAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_templates_asset() {
        let templates = get_asset("templates.json");
        assert!(templates.is_some(), "templates.json should be embedded");
        assert!(
            templates.unwrap().contains("customer-support"),
            "templates.json should contain the customer-support template"
        );
    }

    #[test]
    fn test_get_registry_assets() {
        assert!(get_asset("models.json").is_some(), "models.json should be embedded");
        assert!(get_asset("tools.json").is_some(), "tools.json should be embedded");
    }

    #[test]
    fn test_get_page_assets() {
        assert!(get_asset("pages/home.json").is_some());
        assert!(get_asset("pages/getting_started.json").is_some());
    }

    #[test]
    fn test_get_nonexistent_asset() {
        assert!(get_asset("nonexistent.json").is_none());
    }
}
