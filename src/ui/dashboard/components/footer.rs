//! Dashboard footer component
//!
//! Renders key hints for the current input mode

use super::super::state::{DashboardState, InputMode};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer with the key bindings that apply right now.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let footer_text = match state.input_mode {
        InputMode::Normal => {
            "[1-4/Tab] Status | [/] Search | [j/k] Move | [Enter] Expand | [Space] Select | [Q] Quit"
        }
        InputMode::Search => "Type to search | [Backspace] Delete | [Ctrl-U] Clear | [Enter/Esc] Done",
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
