//! Headless listing mode
//!
//! Prints the same derived view the dashboard shows, without a terminal UI.

use crate::auction::AuctionStatus;
use crate::ui::dashboard::DashboardState;
use crate::ui::dashboard::view::{GroupView, StatusCounts, format_rupees};
use serde::Serialize;
use std::error::Error;
use std::fmt::Write;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct TabCount {
    status: AuctionStatus,
    count: usize,
}

#[derive(Serialize)]
struct GroupSummary<'a> {
    #[serde(flatten)]
    view: &'a GroupView<'a>,
    total_participants: u64,
    status_counts: StatusCounts,
}

#[derive(Serialize)]
struct Listing<'a> {
    tab: AuctionStatus,
    search_term: &'a str,
    tab_counts: Vec<TabCount>,
    groups: Vec<GroupSummary<'a>>,
}

/// Renders the current view of `state` in the requested format.
pub fn render_listing(
    state: &DashboardState,
    format: ListFormat,
) -> Result<String, serde_json::Error> {
    let views = state.filtered_groups();
    match format {
        ListFormat::Json => {
            let listing = Listing {
                tab: state.active_tab(),
                search_term: state.search_term(),
                tab_counts: state
                    .tab_counts()
                    .into_iter()
                    .map(|(status, count)| TabCount { status, count })
                    .collect(),
                groups: views
                    .iter()
                    .map(|view| GroupSummary {
                        view,
                        total_participants: view.total_participants(),
                        status_counts: view.status_counts(),
                    })
                    .collect(),
            };
            serde_json::to_string_pretty(&listing)
        }
        ListFormat::Text => Ok(render_text(state, &views)),
    }
}

fn render_text(state: &DashboardState, views: &[GroupView]) -> String {
    let mut out = String::new();

    let tabs: Vec<String> = state
        .tab_counts()
        .iter()
        .map(|(status, count)| format!("{} {}", status.label(), count))
        .collect();
    let _ = writeln!(out, "Tabs: {}", tabs.join(" | "));
    if state.search_term().is_empty() {
        let _ = writeln!(out, "Showing {} auctions", state.active_tab());
    } else {
        let _ = writeln!(
            out,
            "Showing {} auctions matching {:?}",
            state.active_tab(),
            state.search_term()
        );
    }

    if views.is_empty() {
        let _ = writeln!(out, "\nNo auctions found");
        return out;
    }

    for view in views {
        let selected = if state.is_selected(view.company_name) {
            " [selected]"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "\n{} ({}) - {} participants{}",
            view.company_name,
            view.procurement_name,
            view.total_participants(),
            selected
        );
        for auction in &view.auctions {
            let mut line = format!(
                "  #{} {} [{}] opening {}",
                auction.id,
                auction.title,
                auction.status,
                format_rupees(auction.opening_price)
            );
            if let Some(bid) = auction.current_bid {
                let _ = write!(line, ", current bid {}", format_rupees(bid));
            }
            let _ = write!(
                line,
                ", decrement ₹{}, {} min, starts {} {}, {} participants",
                auction.bid_decrement,
                auction.duration,
                auction.start_date,
                auction.start_time,
                auction.participants
            );
            let _ = writeln!(out, "{}", line);
        }
    }
    out
}

/// Prints the listing for `tab` and `search_term` to stdout.
pub fn run_list_mode(
    mut state: DashboardState,
    tab: AuctionStatus,
    search_term: Option<String>,
    format: ListFormat,
) -> Result<(), Box<dyn Error>> {
    state.set_active_tab(tab);
    if let Some(term) = search_term {
        state.set_search_term(term);
    }
    print!("{}", render_listing(&state, format)?);
    Ok(())
}
