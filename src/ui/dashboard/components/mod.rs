//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod bulk_bar;
pub mod footer;
pub mod groups;
pub mod header;
pub mod logs;
pub mod tabs;
