pub mod list_mode;
pub mod messages;
pub mod tui_mode;

pub use list_mode::{ListFormat, run_list_mode};
pub use tui_mode::run_tui_mode;
