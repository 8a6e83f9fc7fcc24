//! Domain layer - Business logic and domain models

pub mod emotion;
pub mod entry;
pub mod feedback;
pub mod star;
pub mod stats;
pub mod tags;

pub use emotion::Emotion;
pub use entry::JournalEntry;
