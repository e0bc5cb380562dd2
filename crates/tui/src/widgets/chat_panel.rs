//! Simulated conversation panel.
//!
//! Shows the messages revealed so far, a typing indicator while the
//! next message is pending, and a hint line when the run has settled.

use apg_core::simulation::SimulationPhase;
use apg_protocol::ChatMessage;
use apg_protocol::Role;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

/// Render the chat simulation panel.
pub fn render_chat(
    frame: &mut Frame,
    area: Rect,
    revealed: &[ChatMessage],
    typing: Option<Role>,
    phase: SimulationPhase,
) {
    let mut lines = Vec::new();

    if revealed.is_empty() && typing.is_none() && phase == SimulationPhase::Idle {
        lines.push(Line::from(Span::styled(
            "Press s to run the example conversation",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for message in revealed {
        lines.push(speaker_line(message.role));
        lines.push(Line::from(format!("  {}", message.content)));
        lines.push(Line::from(""));
    }

    if let Some(role) = typing {
        lines.push(speaker_line(role));
        lines.push(Line::from(Span::styled(
            "  ...",
            Style::default().fg(Color::DarkGray),
        )));
    }

    if phase == SimulationPhase::Settled {
        lines.push(Line::from(Span::styled(
            "-- end of example (r to reset, s to replay) --",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Simulation"));
    frame.render_widget(paragraph, area);
}

fn speaker_line(role: Role) -> Line<'static> {
    let (label, color) = match role {
        Role::User => ("You", Color::Yellow),
        Role::Assistant => ("Agent", Color::Green),
    };
    Line::from(Span::styled(
        label,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_string(
        revealed: &[ChatMessage],
        typing: Option<Role>,
        phase: SimulationPhase,
    ) -> String {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_chat(frame, frame.area(), revealed, typing, phase))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_idle_panel_shows_hint() {
        let content = render_to_string(&[], None, SimulationPhase::Idle);
        assert!(content.contains("Press s to run"));
    }

    #[test]
    fn test_revealed_messages_are_shown() {
        let revealed = vec![
            ChatMessage {
                role: Role::User,
                content: "Where is my order?".to_string(),
            },
            ChatMessage {
                role: Role::Assistant,
                content: "Checking now.".to_string(),
            },
        ];
        let content = render_to_string(&revealed, None, SimulationPhase::Running);

        assert!(content.contains("You"));
        assert!(content.contains("Where is my order?"));
        assert!(content.contains("Agent"));
        assert!(content.contains("Checking now."));
    }

    #[test]
    fn test_typing_indicator() {
        let content = render_to_string(&[], Some(Role::Assistant), SimulationPhase::Running);
        assert!(content.contains("Agent"));
        assert!(content.contains("..."));
    }

    #[test]
    fn test_settled_panel_shows_end_marker() {
        let content = render_to_string(&[], None, SimulationPhase::Settled);
        assert!(content.contains("end of example"));
    }
}
