//! # apg-tui
//!
//! Terminal user interface for agent-playground.
//!
//! Four screens: home, getting started, the playground (template
//! gallery, configuration editor, code preview, chat simulation), and
//! the contact wizard. State lives in [`App`]; terminal plumbing lives
//! in [`Tui`].

pub mod app;
pub mod clipboard;
pub mod tui;
pub mod widgets;

pub use app::App;
pub use tui::Tui;

use anyhow::Result;
use apg_core::catalog::Catalog;
use apg_core::settings::load_settings;

/// Load the catalog and settings, then run the TUI until the user
/// quits.
pub async fn run_app() -> Result<()> {
    let settings = load_settings(&std::env::current_dir()?)?;
    let catalog = Catalog::load()?;

    let mut tui = Tui::init()?;
    let mut app = App::new(catalog, settings.simulation.to_timings());
    let result = app.run(&mut tui).await;
    tui.restore()?;
    result
}
