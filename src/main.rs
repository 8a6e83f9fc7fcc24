use chrono::Local;
use clap::Parser;
use moodstar::application::{
    emotion_report, init::init, list_entries, star_report, todays_feedback, ConfigService,
    DeleteEntryService, TagSearchService, WriteEntryService,
};
use moodstar::cli::{self, Cli, Commands};
use moodstar::domain::Emotion;
use moodstar::error::MoodstarError;
use moodstar::infrastructure::config::DEFAULT_LOG_LEVEL;
use moodstar::infrastructure::{logging, FileSystemRepository, JournalRepository};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let level = resolve_log_level(cli.log_level.as_deref());
    if let Err(message) = logging::init_logging(&level) {
        eprintln!("Warning: {}", message);
    }

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Command line flag, then MOODSTAR_LOG, then the journal config
fn resolve_log_level(flag: Option<&str>) -> String {
    if let Some(level) = flag {
        return level.to_string();
    }
    FileSystemRepository::discover()
        .and_then(|repo| repo.load_config())
        .map(|config| config.get_log_level())
        .unwrap_or_else(|_| {
            std::env::var("MOODSTAR_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
        })
}

fn parse_emotion(value: Option<String>) -> Result<Option<Emotion>, MoodstarError> {
    value
        .map(|v| Emotion::from_str(&v).map_err(|_| MoodstarError::InvalidEmotion(v)))
        .transpose()
}

fn run(cli: Cli) -> Result<(), MoodstarError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            init(&path)?;
            println!("Initialized moodstar journal at {}", path.display());
            Ok(())
        }
        Some(Commands::Write { emotion, content }) => {
            let repo = FileSystemRepository::discover()?;
            let entry = WriteEntryService::new(repo).execute(&emotion, &content.join(" "))?;
            print!("{}", cli::format_entry(&entry));
            Ok(())
        }
        Some(Commands::List { emotion, limit }) => {
            let repo = FileSystemRepository::discover()?;
            let entries = list_entries(&repo, parse_emotion(emotion)?, limit)?;
            print!("{}", cli::format_entry_list(&entries));
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let repo = FileSystemRepository::discover()?;
            let removed = DeleteEntryService::new(repo).execute(&id)?;
            println!("Deleted entry {}", removed.id);
            Ok(())
        }
        Some(Commands::Search { tags }) => {
            let repo = FileSystemRepository::discover()?;
            let entries = TagSearchService::new(repo).search(&tags)?;
            print!("{}", cli::format_entry_list(&entries));
            Ok(())
        }
        Some(Commands::Tags { limit }) => {
            let repo = FileSystemRepository::discover()?;
            let tags = TagSearchService::new(repo).popular(limit)?;
            print!("{}", cli::format_tag_counts(&tags));
            Ok(())
        }
        Some(Commands::Stars { emotion }) => {
            let repo = FileSystemRepository::discover()?;
            let report = star_report(&repo, parse_emotion(emotion)?)?;
            print!("{}", cli::format_star_report(&report));
            Ok(())
        }
        Some(Commands::Stats) => {
            let repo = FileSystemRepository::discover()?;
            let report = emotion_report(&repo, Local::now().date_naive())?;
            print!("{}", cli::format_emotion_report(&report));
            Ok(())
        }
        Some(Commands::Feedback) => {
            let repo = FileSystemRepository::discover()?;
            let feedback = todays_feedback(&repo)?;
            print!("{}", cli::format_feedback(feedback.as_ref()));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("log_level = {}", config.log_level);
                println!("popular_tags_limit = {}", config.popular_tags_limit);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodstar config [--list | <key> [<value>]]");
                println!("Valid keys: log_level, popular_tags_limit, created");
                Ok(())
            }
        }
        None => {
            println!("moodstar - Terminal emotion journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
