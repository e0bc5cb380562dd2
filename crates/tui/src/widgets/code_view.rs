//! Read-only code preview pane with copy feedback.

use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Render the generated source.
///
/// `copied` switches the title to a confirmation for the short window
/// after a copy.
pub fn render_code(frame: &mut Frame, area: Rect, code: &str, copied: bool) {
    let title = if copied {
        "Generated Code (copied!)"
    } else {
        "Generated Code (y to copy)"
    };
    let title_style = if copied {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(code).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(title_style),
    );
    frame.render_widget(paragraph, area);
}
