//! Entry point for the apg-tui binary.

use anyhow::Result;
use apg_tui::run_app;

#[tokio::main]
async fn main() -> Result<()> {
    run_app().await
}
