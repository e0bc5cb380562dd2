//! `playground` binary.
//!
//! Without arguments it launches the TUI. Subcommands expose the
//! catalog and the code generator for scripting:
//!
//! ```text
//! playground templates
//! playground generate --template customer-support --tool web-search
//! ```

use clap::Parser;
use clap::Subcommand;
use color_eyre::eyre::bail;
use color_eyre::Result;
use colored::Colorize;

use apg_core::catalog::Catalog;
use apg_core::codegen;
use apg_core::editor::ConfigEditor;

#[derive(Parser)]
#[command(
    name = "playground",
    about = "Browse agent templates and generate TypeScript agent code",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the bundled agent templates
    Templates {
        /// Emit the full template records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate TypeScript source for a configuration
    Generate {
        /// Template id to seed the configuration from
        #[arg(long)]
        template: Option<String>,
        /// Override the agent name
        #[arg(long)]
        name: Option<String>,
        /// Override the model id
        #[arg(long)]
        model: Option<String>,
        /// Override the system instructions
        #[arg(long)]
        instructions: Option<String>,
        /// Enable a tool by id (repeatable)
        #[arg(long = "tool")]
        tools: Vec<String>,
        /// Emit the resolved configuration and code as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    match cli.command {
        // Bare `playground` launches the TUI
        None => apg_tui::run_app()
            .await
            .map_err(|e| color_eyre::eyre::eyre!(e)),
        Some(Command::Templates { json }) => list_templates(json),
        Some(Command::Generate {
            template,
            name,
            model,
            instructions,
            tools,
            json,
        }) => generate(template, name, model, instructions, tools, json),
    }
}

fn list_templates(json: bool) -> Result<()> {
    let catalog = Catalog::load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.templates())?);
        return Ok(());
    }

    for template in catalog.templates() {
        println!(
            "{}  {}",
            template.id.bold(),
            format!("[{}]", template.category).cyan()
        );
        println!("    {}", template.description);
    }
    Ok(())
}

fn generate(
    template: Option<String>,
    name: Option<String>,
    model: Option<String>,
    instructions: Option<String>,
    tools: Vec<String>,
    json: bool,
) -> Result<()> {
    let catalog = Catalog::load()?;
    let mut editor = ConfigEditor::new();

    if let Some(id) = template {
        match catalog.template(&id) {
            Some(template) => editor.seed(template),
            None => bail!("Unknown template: {id} (run `playground templates` to list ids)"),
        }
    }
    if let Some(name) = name {
        editor.set_name(name);
    }
    if let Some(model) = model {
        editor.set_model(model);
    }
    if let Some(instructions) = instructions {
        editor.set_instructions(instructions);
    }
    for id in tools {
        if catalog.tool(&id).is_none() {
            bail!("Unknown tool: {id}");
        }
        if !editor.tool_enabled(&id) {
            editor.toggle_tool(&id);
        }
    }

    let code = codegen::generate(editor.config(), catalog.models(), catalog.tools());
    if json {
        let record = serde_json::json!({
            "config": editor.config(),
            "code": code,
        });
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{code}");
    }
    Ok(())
}
