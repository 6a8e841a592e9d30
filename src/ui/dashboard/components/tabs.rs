//! Status tabs and search box
//!
//! Tab badges count every auction with that status; the search term does not affect them.

use super::super::state::{DashboardState, InputMode};
use super::super::utils::status_color;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};

pub fn render_tabs(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    let titles: Vec<Line> = state
        .tab_counts()
        .iter()
        .enumerate()
        .map(|(i, (status, count))| {
            Line::from(vec![
                Span::styled(
                    format!("{} {}", i + 1, status.label()),
                    Style::default().fg(status_color(*status)),
                ),
                Span::styled(format!(" ({})", count), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .select(state.active_tab().index());
    f.render_widget(tabs, chunks[0]);

    let searching = state.input_mode == InputMode::Search;
    let search_line = if state.search_term().is_empty() && !searching {
        Line::from(Span::styled(
            "Search auctions, companies...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::raw(state.search_term().to_string())];
        if searching {
            spans.push(Span::styled(
                "█",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    };

    let border_color = if searching { Color::LightYellow } else { Color::DarkGray };
    let search = Paragraph::new(search_line).block(
        Block::default()
            .title("SEARCH")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(search, chunks[1]);
}
