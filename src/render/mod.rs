//! Presentation of analysis results.
//!
//! Terminal colour bars and report lines, plus JSON reports. Nothing in here
//! computes statistics; it only formats what [`crate::analysis`] produced.

mod bar;
mod json;
mod report;

pub use bar::{ansi_foreground, colour_bar, ANSI_RESET};
pub use json::{to_json, GroupsReport, PercentilesReport};
pub use report::{group_lines, percentile_lines, Summary};
