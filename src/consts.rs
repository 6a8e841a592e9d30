pub mod cli_consts {
    //! Dashboard Constants
    //!
    //! Tunables for the terminal UI and the demo account shown in the header.

    use std::time::Duration;

    // =============================================================================
    // UI LOOP
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// How long to wait for a key event before redrawing (milliseconds)
    pub const EVENT_POLL_INTERVAL_MS: u64 = 100;

    /// How long the splash screen stays up unless a key is pressed (seconds)
    pub const SPLASH_DURATION_SECS: u64 = 2;

    pub const fn event_poll_interval() -> Duration {
        Duration::from_millis(EVENT_POLL_INTERVAL_MS)
    }

    pub const fn splash_duration() -> Duration {
        Duration::from_secs(SPLASH_DURATION_SECS)
    }

    // =============================================================================
    // HEADER
    // =============================================================================

    /// Header buttons, in display order.
    pub const HEADER_CONTROLS: [&str; 3] = ["Export Data", "Create Auction", "Filters"];

    /// Account shown in the header bar.
    pub mod account {
        pub const USER_NAME: &str = "Smeet";
        pub const REMAINING_CREDITS: u32 = 184;
    }
}
