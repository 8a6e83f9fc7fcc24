//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_emotion_report, format_entry, format_entry_list, format_feedback, format_star_report,
    format_tag_counts,
};
