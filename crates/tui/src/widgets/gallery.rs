//! Template gallery rendered as a selectable table.

use apg_protocol::AgentTemplate;
use ratatui::layout::Constraint;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Cell;
use ratatui::widgets::Row;
use ratatui::widgets::Table;
use ratatui::widgets::TableState;
use ratatui::Frame;

/// Render the template gallery.
///
/// Templates appear in catalog order; `selected` highlights one row.
pub fn render_gallery(frame: &mut Frame, area: Rect, templates: &[AgentTemplate], selected: usize) {
    let rows: Vec<Row> = templates
        .iter()
        .map(|template| {
            Row::new(vec![
                Cell::from(template.name.clone()),
                Cell::from(template.category.clone())
                    .style(Style::default().fg(Color::Cyan)),
                Cell::from(template.description.clone()),
            ])
        })
        .collect();

    let header = Row::new(vec![
        Cell::from("Template"),
        Cell::from("Category"),
        Cell::from("Description"),
    ])
    .style(
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Cyan),
    );

    let widths = [
        Constraint::Length(24),
        Constraint::Length(12),
        Constraint::Percentage(60),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Templates (Enter to open, q to quit)"),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut table_state = TableState::default();
    if !templates.is_empty() {
        table_state.select(Some(selected));
    }

    frame.render_stateful_widget(table, area, &mut table_state);
}
