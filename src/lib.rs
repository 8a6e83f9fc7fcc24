//! moodstar - Terminal emotion journal
//!
//! Records daily entries tagged with an emotion, extracts hashtags and
//! keyword tags from their text, and awards each entry a decorative
//! "emotion star" badge.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodstarError;
