//! Dashboard main renderer

use super::components::bulk_bar::BULK_BAR_HEIGHT;
use super::components::{bulk_bar, footer, groups, header, logs, tabs};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let bulk_bar_height = if state.selected_companies().is_empty() {
        0
    } else {
        BULK_BAR_HEIGHT
    };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(bulk_bar_height),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0]);
    tabs::render_tabs(f, main_chunks[1], state);
    bulk_bar::render_bulk_bar(f, main_chunks[2], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(main_chunks[3]);

    groups::render_groups_panel(f, content_chunks[0], state);
    logs::render_logs_panel(f, content_chunks[1], state);
    footer::render_footer(f, main_chunks[4], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::AuctionStatus;
    use crate::seed;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_tabs_groups_and_expanded_auctions() {
        let state = DashboardState::new(seed::company_groups(), AuctionStatus::Upcoming, true);
        let screen = render_to_string(&state);

        assert!(screen.contains("Upcoming (4)"));
        assert!(screen.contains("Closed (2)"));
        assert!(screen.contains("LogisticsNow"));
        assert!(screen.contains("GANDHAR->JNPT->20FT Container Transport"));
        assert!(screen.contains("₹140,977"));
        assert!(!screen.contains("company group selected"));
    }

    #[test]
    fn test_renders_header_controls_and_account() {
        let state = DashboardState::new(seed::company_groups(), AuctionStatus::Active, false);
        let screen = render_to_string(&state);

        assert!(screen.contains("[Export Data] [Create Auction] [Filters]"));
        assert!(screen.contains("Remaining Credits: 184"));
        assert!(screen.contains("Smeet"));
    }

    #[test]
    fn test_renders_empty_state_and_bulk_bar() {
        let mut state = DashboardState::new(seed::company_groups(), AuctionStatus::Closed, false);
        state.toggle_company_selection("GlobalLogistics");
        state.set_search_term("no such lane");
        let screen = render_to_string(&state);

        assert!(screen.contains("No auctions found"));
        assert!(screen.contains("1 company group selected"));
        assert!(screen.contains("Closed (2)"));
    }
}
