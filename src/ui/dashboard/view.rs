//! Derived dashboard view
//!
//! Pure projections over the company groups: tab filtering, search, badge counts and
//! per-group summaries. Nothing here is cached; the renderer recomputes it every frame.

use crate::auction::{Auction, AuctionStatus, CompanyGroup};
use serde::Serialize;

/// A company group as it appears on screen: only the auctions that pass the tab and search filters.
#[derive(Debug, Clone, Serialize)]
pub struct GroupView<'a> {
    pub company_name: &'a str,
    pub procurement_name: &'a str,
    pub is_expanded: bool,
    pub auctions: Vec<&'a Auction>,
    /// Unfiltered auctions of the group, used for status counts.
    #[serde(skip)]
    all_auctions: &'a [Auction],
}

impl<'a> GroupView<'a> {
    /// Sum of participants over the visible auctions.
    pub fn total_participants(&self) -> u64 {
        total_participants(self.auctions.iter().copied())
    }

    /// Status breakdown over every auction in the group, regardless of the active tab.
    pub fn status_counts(&self) -> StatusCounts {
        status_counts(self.all_auctions)
    }
}

/// Filters every group down to the auctions with `tab` status that match `search_term`.
///
/// Groups left without auctions are dropped. Group and auction order is preserved.
pub fn filter_groups<'a>(
    groups: &'a [CompanyGroup],
    tab: AuctionStatus,
    search_term: &str,
) -> Vec<GroupView<'a>> {
    let needle = search_term.to_lowercase();
    groups
        .iter()
        .filter_map(|group| {
            let auctions: Vec<&Auction> = group
                .auctions
                .iter()
                .filter(|a| a.status == tab && a.matches_search(&group.company_name, &needle))
                .collect();
            if auctions.is_empty() {
                return None;
            }
            Some(GroupView {
                company_name: &group.company_name,
                procurement_name: &group.procurement_name,
                is_expanded: group.is_expanded,
                auctions,
                all_auctions: &group.auctions,
            })
        })
        .collect()
}

/// Number of auctions with `status` across all groups. Ignores the search term.
pub fn tab_count(groups: &[CompanyGroup], status: AuctionStatus) -> usize {
    groups
        .iter()
        .map(|g| g.auctions.iter().filter(|a| a.status == status).count())
        .sum()
}

/// Badge counts for every tab, in tab order.
pub fn tab_counts(groups: &[CompanyGroup]) -> [(AuctionStatus, usize); 4] {
    AuctionStatus::ALL.map(|status| (status, tab_count(groups, status)))
}

pub fn total_participants<'a>(auctions: impl IntoIterator<Item = &'a Auction>) -> u64 {
    auctions.into_iter().map(|a| u64::from(a.participants)).sum()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub upcoming: usize,
    pub active: usize,
    pub paused: usize,
    pub closed: usize,
}

impl StatusCounts {
    pub fn get(&self, status: AuctionStatus) -> usize {
        match status {
            AuctionStatus::Upcoming => self.upcoming,
            AuctionStatus::Active => self.active,
            AuctionStatus::Paused => self.paused,
            AuctionStatus::Closed => self.closed,
        }
    }
}

pub fn status_counts(auctions: &[Auction]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for auction in auctions {
        match auction.status {
            AuctionStatus::Upcoming => counts.upcoming += 1,
            AuctionStatus::Active => counts.active += 1,
            AuctionStatus::Paused => counts.paused += 1,
            AuctionStatus::Closed => counts.closed += 1,
        }
    }
    counts
}

/// Per-auction buttons. None of them change auction data.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AuctionAction {
    Start,
    Pause,
    Resume,
    Close,
}

impl AuctionAction {
    pub fn label(&self) -> &'static str {
        match self {
            AuctionAction::Start => "Start Auction",
            AuctionAction::Pause => "Pause",
            AuctionAction::Resume => "Resume",
            AuctionAction::Close => "Close Auction",
        }
    }
}

/// Buttons offered for an auction in the given status.
pub fn auction_actions(status: AuctionStatus) -> &'static [AuctionAction] {
    match status {
        AuctionStatus::Upcoming => &[AuctionAction::Start],
        AuctionStatus::Active => &[AuctionAction::Pause, AuctionAction::Close],
        AuctionStatus::Paused => &[AuctionAction::Resume, AuctionAction::Close],
        AuctionStatus::Closed => &[],
    }
}

/// Initial state of an auction's publish checkbox.
pub fn publish_default(status: AuctionStatus) -> bool {
    status != AuctionStatus::Upcoming
}

/// Buttons on the bulk action bar.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BulkAction {
    EditAuctions,
    ShortlistTransporters,
    AddUser,
    BulkUpload,
    ClearSelection,
}

impl BulkAction {
    pub const ALL: [BulkAction; 5] = [
        BulkAction::EditAuctions,
        BulkAction::ShortlistTransporters,
        BulkAction::AddUser,
        BulkAction::BulkUpload,
        BulkAction::ClearSelection,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BulkAction::EditAuctions => "Edit Auctions",
            BulkAction::ShortlistTransporters => "Shortlist Transporters",
            BulkAction::AddUser => "Add User",
            BulkAction::BulkUpload => "Bulk Upload",
            BulkAction::ClearSelection => "Clear Selection",
        }
    }

    /// Keyboard shortcut shown next to the label.
    pub fn key(&self) -> char {
        match self {
            BulkAction::EditAuctions => 'e',
            BulkAction::ShortlistTransporters => 's',
            BulkAction::AddUser => 'a',
            BulkAction::BulkUpload => 'u',
            BulkAction::ClearSelection => 'c',
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.key() == key)
    }
}

/// "1 company group selected" / "3 company groups selected".
pub fn selection_summary(count: usize) -> String {
    let plural = if count > 1 { "s" } else { "" };
    format!("{} company group{} selected", count, plural)
}

/// Formats a rupee amount with thousands separators, e.g. `₹140,977`.
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{}", grouped)
}
