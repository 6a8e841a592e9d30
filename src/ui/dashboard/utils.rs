//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::auction::AuctionStatus;
use crate::events::Origin;
use ratatui::prelude::Color;

/// Badge color for an auction status
pub fn status_color(status: AuctionStatus) -> Color {
    match status {
        AuctionStatus::Upcoming => Color::LightBlue,
        AuctionStatus::Active => Color::LightGreen,
        AuctionStatus::Paused => Color::LightYellow,
        AuctionStatus::Closed => Color::Gray,
    }
}

/// Single-character glyph shown in status badges
pub fn status_icon(status: AuctionStatus) -> &'static str {
    match status {
        AuctionStatus::Upcoming => "◷",
        AuctionStatus::Active => "▶",
        AuctionStatus::Paused => "⏸",
        AuctionStatus::Closed => "✓",
    }
}

/// Get a ratatui color for an activity log entry based on where it came from
pub fn get_origin_color(origin: &Origin) -> Color {
    match origin {
        Origin::Navigation => Color::Cyan,
        Origin::Selection => Color::Green,
        Origin::BulkAction => Color::Yellow,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2025-06-23 16:10:32"),
            "06-23 16:10"
        );
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }
}
