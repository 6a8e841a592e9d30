//! Auction data model
//!
//! Types for auctions, their lifecycle status and the procurement groups that hold them

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of an auction. Doubles as the dashboard tab filter.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AuctionStatus {
    /// Scheduled, bidding has not started yet.
    #[default]
    Upcoming,
    /// Bidding is open.
    Active,
    /// Bidding was suspended.
    Paused,
    /// Bidding has ended.
    Closed,
}

impl AuctionStatus {
    /// All statuses in tab order.
    pub const ALL: [AuctionStatus; 4] = [
        AuctionStatus::Upcoming,
        AuctionStatus::Active,
        AuctionStatus::Paused,
        AuctionStatus::Closed,
    ];

    /// Human readable label used for tabs.
    pub fn label(&self) -> &'static str {
        match self {
            AuctionStatus::Upcoming => "Upcoming",
            AuctionStatus::Active => "Active",
            AuctionStatus::Paused => "Paused",
            AuctionStatus::Closed => "Closed",
        }
    }

    /// Position of this status in the tab bar.
    pub fn index(&self) -> usize {
        match self {
            AuctionStatus::Upcoming => 0,
            AuctionStatus::Active => 1,
            AuctionStatus::Paused => 2,
            AuctionStatus::Closed => 3,
        }
    }

    /// The tab to the right, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping around.
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for AuctionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upcoming" => Ok(AuctionStatus::Upcoming),
            "active" => Ok(AuctionStatus::Active),
            "paused" => Ok(AuctionStatus::Paused),
            "closed" => Ok(AuctionStatus::Closed),
            other => Err(format!(
                "unknown status '{}', expected one of: upcoming, active, paused, closed",
                other
            )),
        }
    }
}

/// A single reverse-bidding lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Opening price in whole rupees.
    pub opening_price: u64,
    /// Minimum amount each bid must undercut the previous one by.
    pub bid_decrement: u64,
    /// Duration in minutes.
    pub duration: u32,
    pub start_date: String,
    pub start_time: String,
    pub status: AuctionStatus,
    pub participants: u32,
    /// Lowest bid so far, only present once bidding has started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_bid: Option<u64>,
}

/// Procurement-level grouping of auctions under one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyGroup {
    pub company_name: String,
    pub procurement_name: String,
    pub auctions: Vec<Auction>,
    pub is_expanded: bool,
}

impl Auction {
    /// Case-insensitive substring match against title, description and the owning company.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, company_name: &str, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || company_name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!("Active".parse::<AuctionStatus>(), Ok(AuctionStatus::Active));
        assert_eq!("CLOSED".parse::<AuctionStatus>(), Ok(AuctionStatus::Closed));
        assert!("running".parse::<AuctionStatus>().is_err());
    }

    #[test]
    fn test_status_display_matches_serde_name() {
        for status in AuctionStatus::iter() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(AuctionStatus::Closed.next(), AuctionStatus::Upcoming);
        assert_eq!(AuctionStatus::Upcoming.prev(), AuctionStatus::Closed);
        for status in AuctionStatus::ALL {
            assert_eq!(status.next().prev(), status);
        }
    }
}
