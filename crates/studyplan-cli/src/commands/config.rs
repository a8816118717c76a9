//! Configuration commands for CLI.

use clap::Subcommand;
use studyplan_core::learning::parse_date;
use studyplan_core::Config;

/// Keys whose values must be calendar dates.
const DATE_KEYS: [&str; 2] = ["learning.exam_date", "learning.start_date"];

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "learning.exam_date", "generator.seed")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value; lists take JSON (e.g. '["math"]')
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(unknown_key(&key).into()),
            }
        }
        ConfigAction::Set { key, value } => {
            // A blank start date clears it back to "today"
            let clears_start = key == "learning.start_date" && value.trim().is_empty();
            if DATE_KEYS.contains(&key.as_str()) && !clears_start {
                parse_date(key.trim_start_matches("learning."), &value)?;
            }

            let mut config = Config::load()?;
            config.set(&key, &value)?;
            if let Some(stored) = config.get(&key) {
                println!("{key} = {stored}");
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("config reset to defaults at {}", Config::path()?.display());
        }
    }
    Ok(())
}

fn unknown_key(key: &str) -> String {
    if key.starts_with("learning.") || key.starts_with("generator.") {
        format!("unknown key: {key}")
    } else {
        format!("unknown key: {key} (keys live under 'learning.' or 'generator.')")
    }
}
