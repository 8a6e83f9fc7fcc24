//! Application layer - Use cases and orchestration

pub mod delete_entry;
pub mod init;
pub mod list_entries;
pub mod manage_config;
pub mod report;
pub mod search_tags;
pub mod stars;
pub mod write_entry;

pub use delete_entry::DeleteEntryService;
pub use list_entries::list_entries;
pub use manage_config::ConfigService;
pub use report::{emotion_report, todays_feedback, EmotionReport};
pub use search_tags::TagSearchService;
pub use stars::{star_report, StarReport};
pub use write_entry::WriteEntryService;
