//! Bulk action bar, shown only while at least one company group is selected

use super::super::state::DashboardState;
use super::super::view::{BulkAction, selection_summary};

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Rows the bar needs when visible.
pub const BULK_BAR_HEIGHT: u16 = 3;

pub fn render_bulk_bar(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let selected = state.selected_companies().len();
    if selected == 0 {
        return;
    }

    let mut spans = vec![Span::styled(
        selection_summary(selected),
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    )];
    for action in BulkAction::ALL {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[{}] {}", action.key(), action.label()),
            Style::default().fg(Color::White),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightBlue)),
    );
    f.render_widget(bar, area);
}
