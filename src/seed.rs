//! Built-in demo data loaded at startup.

use crate::auction::{Auction, AuctionStatus, CompanyGroup};

#[allow(clippy::too_many_arguments)]
fn auction(
    id: &str,
    title: &str,
    description: &str,
    opening_price: u64,
    bid_decrement: u64,
    duration: u32,
    start: (&str, &str),
    status: AuctionStatus,
    participants: u32,
    current_bid: Option<u64>,
) -> Auction {
    Auction {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        opening_price,
        bid_decrement,
        duration,
        start_date: start.0.to_string(),
        start_time: start.1.to_string(),
        status,
        participants,
        current_bid,
    }
}

fn group(
    company_name: &str,
    procurement_name: &str,
    is_expanded: bool,
    auctions: Vec<Auction>,
) -> CompanyGroup {
    CompanyGroup {
        company_name: company_name.to_string(),
        procurement_name: procurement_name.to_string(),
        auctions,
        is_expanded,
    }
}

/// Returns the demo procurement groups in display order.
pub fn company_groups() -> Vec<CompanyGroup> {
    use AuctionStatus::*;

    vec![
        group(
            "LogisticsNow",
            "prod test new 2",
            true,
            vec![
                auction(
                    "555384",
                    "GANDHAR->JNPT->20FT Container Transport",
                    "Container transport from Gandhar to JNPT port, 20FT container",
                    140_977,
                    500,
                    10,
                    ("23-06-2025", "16:10:32"),
                    Upcoming,
                    8,
                    None,
                ),
                auction(
                    "250028",
                    "GANDHAR->JNPT->40FT Container Transport",
                    "Container transport from Gandhar to JNPT port, 40FT container",
                    160_012,
                    100,
                    10,
                    ("23-06-2025", "16:10:54"),
                    Active,
                    12,
                    Some(158_500),
                ),
            ],
        ),
        group(
            "TheLogisticsNow",
            "10lanes bulk upload test ID:5626",
            false,
            vec![
                auction(
                    "445821",
                    "Bulk Cargo Delhi to Chennai",
                    "Bulk cargo transportation from Delhi to Chennai",
                    250_000,
                    1000,
                    15,
                    ("22-06-2025", "14:30:00"),
                    Closed,
                    15,
                    Some(242_000),
                ),
                auction(
                    "445822",
                    "Express Delivery Mumbai to Pune",
                    "Express delivery service for urgent cargo",
                    85_000,
                    250,
                    8,
                    ("24-06-2025", "10:15:00"),
                    Upcoming,
                    6,
                    None,
                ),
            ],
        ),
        group(
            "THELOGISTICSNOW",
            "LoRRI Spot Auction: 30/1/2025 ID:6607",
            false,
            vec![auction(
                "667890",
                "Spot Auction - Emergency Transport",
                "Emergency transport service for time-critical cargo",
                95_000,
                500,
                5,
                ("30-01-2025", "09:00:00"),
                Paused,
                4,
                Some(92_000),
            )],
        ),
        group(
            "GlobalLogistics",
            "International Freight Services ID:7890",
            false,
            vec![
                auction(
                    "778901",
                    "International Freight - Mumbai to Dubai",
                    "International freight service for export cargo",
                    320_000,
                    2000,
                    20,
                    ("25-06-2025", "11:00:00"),
                    Upcoming,
                    18,
                    None,
                ),
                auction(
                    "778902",
                    "Air Cargo - Delhi to Singapore",
                    "Express air cargo service for time-sensitive goods",
                    450_000,
                    3000,
                    12,
                    ("26-06-2025", "09:30:00"),
                    Active,
                    22,
                    Some(441_000),
                ),
            ],
        ),
        group(
            "FastTrack Logistics",
            "Regional Distribution Network ID:8901",
            false,
            vec![
                auction(
                    "889012",
                    "Last Mile Delivery - Bangalore Network",
                    "Last mile delivery services across Bangalore metropolitan area",
                    180_000,
                    800,
                    18,
                    ("27-06-2025", "13:45:00"),
                    Upcoming,
                    14,
                    None,
                ),
                auction(
                    "889013",
                    "Cold Chain Transport - Hyderabad to Chennai",
                    "Temperature-controlled transport for pharmaceutical goods",
                    275_000,
                    1500,
                    25,
                    ("28-06-2025", "08:15:00"),
                    Closed,
                    11,
                    Some(268_000),
                ),
            ],
        ),
    ]
}
