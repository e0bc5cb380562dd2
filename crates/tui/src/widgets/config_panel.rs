//! Editable configuration panel: name, model, instructions, tools.

use apg_protocol::AgentConfig;
use apg_protocol::ModelOption;
use apg_protocol::ToolOption;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Number of fixed rows before the tool switches (name, model,
/// instructions).
pub const FIXED_ROWS: usize = 3;

/// Render the configuration editor panel.
///
/// `focus` is a row index: 0 name, 1 model, 2 instructions, then one
/// row per tool in registry order. `editing` marks the focused text
/// field as being edited.
pub fn render_config(
    frame: &mut Frame,
    area: Rect,
    config: &AgentConfig,
    models: &[ModelOption],
    tools: &[ToolOption],
    focus: usize,
    editing: bool,
) {
    let mut lines = Vec::new();

    lines.push(field_line("Name", &config.name, focus == 0, editing));

    let model_label = models
        .iter()
        .find(|m| m.id == config.model)
        .map(|m| m.label.as_str())
        .unwrap_or(config.model.as_str());
    let model_value = format!("< {model_label} >");
    lines.push(field_line("Model", &model_value, focus == 1, false));

    lines.push(field_line(
        "Instructions",
        &config.instructions,
        focus == 2,
        editing,
    ));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tools",
        Style::default().add_modifier(Modifier::BOLD),
    )));

    for (i, tool) in tools.iter().enumerate() {
        let enabled = config.tools.iter().any(|id| *id == tool.id);
        let marker = if enabled { "[x]" } else { "[ ]" };
        let focused = focus == FIXED_ROWS + i;
        let prefix = if focused { "> " } else { "  " };
        let style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{prefix}{marker} {}", tool.label),
            style,
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Configuration"),
    );
    frame.render_widget(paragraph, area);
}

fn field_line<'a>(label: &'a str, value: &str, focused: bool, editing: bool) -> Line<'a> {
    let prefix = if focused { "> " } else { "  " };
    let cursor = if focused && editing { "_" } else { "" };
    let style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{prefix}{label}: "), style),
        Span::raw(format!("{value}{cursor}")),
    ])
}
