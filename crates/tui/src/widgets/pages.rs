//! Static content screens: home and getting started.

use apg_protocol::GuidePage;
use apg_protocol::HomePage;
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

fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

/// Render the home screen: tagline, features, and case studies.
pub fn render_home(frame: &mut Frame, area: Rect, page: &HomePage) {
    let mut lines = vec![
        Line::from(Span::styled(
            page.tagline.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Features"),
    ];

    for feature in &page.features {
        lines.push(Line::from(format!("  {} - {}", feature.title, feature.description)));
    }

    lines.push(Line::from(""));
    lines.push(heading("Case Studies"));
    for case in &page.case_studies {
        lines.push(Line::from(Span::styled(
            format!("  {} ({})", case.company_type, case.industry),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("    Challenge: {}", case.challenge)));
        lines.push(Line::from(format!("    Outcome: {}", case.effect)));
        lines.push(Line::from(Span::styled(
            format!("    \"{}\"", case.quote),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Home"));
    frame.render_widget(paragraph, area);
}

/// Render the getting-started guide steps.
pub fn render_guide(frame: &mut Frame, area: Rect, page: &GuidePage) {
    let mut lines = Vec::new();
    for step in &page.steps {
        lines.push(heading(format!("{}. {}", step.step_number, step.title)));
        lines.push(Line::from(format!("  {}", step.description)));
        for code_line in step.code.lines() {
            lines.push(Line::from(Span::styled(
                format!("    {code_line}"),
                Style::default().fg(Color::Green),
            )));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Getting Started"),
        );
    frame.render_widget(paragraph, area);
}
