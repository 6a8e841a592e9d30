//! Company group list
//!
//! One header row per rendered group, followed by auction cards when the group is expanded.

use super::super::state::DashboardState;
use super::super::utils::{status_color, status_icon};
use super::super::view::{GroupView, auction_actions, format_rupees, publish_default};
use crate::auction::{Auction, AuctionStatus};

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_groups_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title(format!("{} AUCTIONS", state.active_tab().label().to_uppercase()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let views = state.filtered_groups();
    if views.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No auctions found",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Try adjusting your search or filters",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let mut lines = Vec::new();
    let mut focus_line = 0;
    for (i, view) in views.iter().enumerate() {
        let focused = i == state.focused;
        if focused {
            focus_line = lines.len();
        }
        lines.push(group_header(view, focused, state.is_selected(view.company_name)));
        if view.is_expanded {
            for auction in &view.auctions {
                lines.extend(auction_card(auction));
            }
        }
    }

    // Keep the focused header on screen
    let visible_rows = area.height.saturating_sub(2) as usize;
    let scroll = (focus_line + 1).saturating_sub(visible_rows) as u16;

    f.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

fn group_header<'a>(view: &GroupView<'a>, focused: bool, selected: bool) -> Line<'a> {
    let marker = if view.is_expanded { "▾" } else { "▸" };
    let checkbox = if selected { "[x]" } else { "[ ]" };
    let name_style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let counts = view.status_counts();
    let mut spans = vec![
        Span::raw(format!("{} {} ", checkbox, marker)),
        Span::styled(view.company_name, name_style),
        Span::styled(
            format!("  {}", view.procurement_name),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("  {} participants ", view.total_participants()),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    for status in AuctionStatus::ALL {
        spans.push(Span::styled(
            format!(" {}{}", status_icon(status), counts.get(status)),
            Style::default().fg(status_color(status)),
        ));
    }
    Line::from(spans)
}

fn auction_card(auction: &Auction) -> Vec<Line<'_>> {
    let indent = "      ";
    let label = Style::default().fg(Color::DarkGray);

    let mut prices = vec![
        Span::raw(indent),
        Span::styled("Opening Price ", label),
        Span::styled(
            format_rupees(auction.opening_price),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(bid) = auction.current_bid {
        prices.push(Span::styled("  Current Bid ", Style::default().fg(Color::Green)));
        prices.push(Span::styled(
            format_rupees(bid),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ));
    }
    prices.extend([
        Span::styled("  Bid Decrement ", label),
        Span::raw(format!("₹{}", auction.bid_decrement)),
        Span::styled("  Duration ", label),
        Span::raw(format!("{} min", auction.duration)),
        Span::styled("  Participants ", Style::default().fg(Color::LightBlue)),
        Span::styled(
            auction.participants.to_string(),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let publish = if publish_default(auction.status) {
        "[x] Publish"
    } else {
        "[ ] Publish"
    };
    let mut controls = vec![Span::raw(indent), Span::raw(publish)];
    for action in auction_actions(auction.status) {
        controls.push(Span::styled(
            format!("  <{}>", action.label()),
            Style::default().fg(Color::Cyan),
        ));
    }

    vec![
        Line::from(vec![
            Span::raw(indent),
            Span::styled(
                auction.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} {}", status_icon(auction.status), auction.status),
                Style::default().fg(status_color(auction.status)),
            ),
            Span::styled(
                format!("  #{}  {} at {}", auction.id, auction.start_date, auction.start_time),
                label,
            ),
        ]),
        Line::from(vec![
            Span::raw(indent),
            Span::styled(auction.description.as_str(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(prices),
        Line::from(controls),
        Line::from(""),
    ]
}
