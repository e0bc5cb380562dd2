//! Contact wizard screen: input form, confirmation, completion.

use apg_core::contact::ContactStep;
use apg_core::contact::ContactWizard;
use apg_core::contact::INQUIRY_TYPES;
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

/// Row index of the Continue button on the input step, after the six
/// form fields.
pub const CONTINUE_ROW: usize = 6;

/// Display label for an inquiry type value.
pub fn inquiry_label(value: &str) -> &str {
    INQUIRY_TYPES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or("(select)")
}

/// Render the contact wizard for its current step.
pub fn render_contact(
    frame: &mut Frame,
    area: Rect,
    wizard: &ContactWizard,
    focus: usize,
    editing: bool,
) {
    let lines = match wizard.step() {
        ContactStep::Input => input_lines(wizard, focus, editing),
        ContactStep::Confirm => confirm_lines(wizard),
        ContactStep::Complete => complete_lines(),
    };

    let title = match wizard.step() {
        ContactStep::Input => "Contact - Step 1 of 3: Your details",
        ContactStep::Confirm => "Contact - Step 2 of 3: Confirm",
        ContactStep::Complete => "Contact - Step 3 of 3: Done",
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

fn input_lines(wizard: &ContactWizard, focus: usize, editing: bool) -> Vec<Line<'static>> {
    let form = wizard.form();
    let errors = wizard.errors();

    let inquiry_value = format!("< {} >", inquiry_label(&form.inquiry_type));
    let rows: [(&str, &str, Option<&str>); 6] = [
        (
            "Inquiry type *",
            inquiry_value.as_str(),
            errors.inquiry_type.as_deref(),
        ),
        (
            "Company *",
            form.company_name.as_str(),
            errors.company_name.as_deref(),
        ),
        ("Name *", form.name.as_str(), errors.name.as_deref()),
        ("Email *", form.email.as_str(), errors.email.as_deref()),
        ("Phone", form.phone.as_str(), None),
        (
            "Challenge *",
            form.challenge.as_str(),
            errors.challenge.as_deref(),
        ),
    ];

    let mut lines = Vec::new();
    for (i, (label, value, error)) in rows.iter().enumerate() {
        let focused = focus == i;
        let prefix = if focused { "> " } else { "  " };
        let cursor = if focused && editing && i != 0 { "_" } else { "" };
        let style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{prefix}{label}: "), style),
            Span::raw(format!("{value}{cursor}")),
        ]));
        if let Some(message) = error {
            lines.push(Line::from(Span::styled(
                format!("    {message}"),
                Style::default().fg(Color::Red),
            )));
        }
    }

    lines.push(Line::from(""));
    let continue_style = if focus == CONTINUE_ROW {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled("[ Continue ]", continue_style)));
    lines
}

fn confirm_lines(wizard: &ContactWizard) -> Vec<Line<'static>> {
    let form = wizard.form();
    let mut lines = vec![Line::from(Span::styled(
        "Please review your inquiry:",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::from(""));
    for (label, value) in [
        ("Inquiry type", inquiry_label(&form.inquiry_type)),
        ("Company", form.company_name.as_str()),
        ("Name", form.name.as_str()),
        ("Email", form.email.as_str()),
        ("Phone", form.phone.as_str()),
        ("Challenge", form.challenge.as_str()),
    ] {
        let shown = if value.is_empty() { "-" } else { value };
        lines.push(Line::from(format!("  {label}: {shown}")));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter to submit, Esc to go back and edit",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn complete_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Thank you for your inquiry!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Our team will get back to you within two business days."),
        Line::from(""),
        Line::from(Span::styled(
            "r to start a new inquiry",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}
