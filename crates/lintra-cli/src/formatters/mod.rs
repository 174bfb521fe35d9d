//! Output formatters for analysis reports.

pub mod human;
pub mod json;

pub use human::{print_human, print_rules};
pub use json::print_json;
