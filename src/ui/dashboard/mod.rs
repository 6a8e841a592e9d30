//! Auction dashboard screen
//!
//! Split into state, derived view, input handling and rendering

pub mod components;
pub mod input;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;
pub mod view;

// Re-export main types and functions for external use
pub use input::handle_key_event;
pub use renderer::render_dashboard;
pub use state::DashboardState;
