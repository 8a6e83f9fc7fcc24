//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodstar")]
#[command(about = "Terminal emotion journal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log level for diagnostics on stderr (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write a new entry
    Write {
        /// Emotion (기쁨, 슬픔, 화남, 불안, 평온, 흥분 or joy, sadness, ...)
        #[arg(short, long)]
        emotion: String,

        /// Entry text; words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },

    /// List entries, newest first
    List {
        /// Only entries with this emotion
        #[arg(short, long)]
        emotion: Option<String>,

        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Delete an entry and its star
    Delete {
        /// Entry id as shown by 'list'
        id: String,
    },

    /// Find entries whose tags contain any of the given tags
    Search {
        /// Tags to look for (leading # optional)
        tags: Vec<String>,
    },

    /// Show the most used tags
    Tags {
        /// Number of tags to show (default: popular_tags_limit from config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show collected emotion stars
    Stars {
        /// Only stars for this emotion
        #[arg(short, long)]
        emotion: Option<String>,
    },

    /// Show emotion statistics and the last 7 days
    Stats,

    /// Show feedback for today's entries
    Feedback,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
