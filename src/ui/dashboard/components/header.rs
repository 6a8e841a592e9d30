//! Dashboard header component
//!
//! Renders the product title, page heading, header controls and account summary

use crate::consts::cli_consts::account::{REMAINING_CREDITS, USER_NAME};
use crate::consts::cli_consts::HEADER_CONTROLS;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and account info.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Thick);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(52),
            Constraint::Length(28),
        ])
        .split(inner);

    let title = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                "LoRRI",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  Logistics Reverse Auctions",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                "Auction Management",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ]);
    f.render_widget(title, header_chunks[0]);

    // Display only; none of these are bound to keys.
    let mut controls: Vec<Span> = Vec::new();
    for label in HEADER_CONTROLS {
        controls.push(Span::styled(
            format!("[{}]", label),
            Style::default().fg(Color::DarkGray),
        ));
        controls.push(Span::raw(" "));
    }
    controls.push(Span::styled("🔔", Style::default().fg(Color::Yellow)));
    let controls = Paragraph::new(vec![Line::default(), Line::from(controls)])
        .alignment(Alignment::Right);
    f.render_widget(controls, header_chunks[1]);

    let account = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("Remaining Credits: "),
            Span::styled(
                REMAINING_CREDITS.to_string(),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(USER_NAME, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Right);
    f.render_widget(account, header_chunks[2]);
}
