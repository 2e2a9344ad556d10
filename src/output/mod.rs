//! Output formatting for host count reports.
//!
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod json;
mod terminal;

pub use json::report_json;
pub use terminal::{format_field, format_report};
