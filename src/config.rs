//! Environment and logging setup for the command line tool.

use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::PathBuf;

/// Env var naming the log4rs config file.
pub const LOG_CONFIG_ENV: &str = "IP_RANGE_CIDR_LOG_CONFIG";
/// Log4rs config file used when the env var is unset.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_config: PathBuf,
}

impl Settings {
    /// Load `.env` if present, then read settings from the environment.
    pub fn from_env() -> Settings {
        dotenv::dotenv().ok();
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_config = lookup(LOG_CONFIG_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string());
        Settings {
            log_config: PathBuf::from(log_config),
        }
    }
}

/// Initialise log4rs.
///
/// Uses the configured file when it exists, otherwise logs warnings and
/// above to stderr. Stdout carries only CIDR output.
pub fn init_logging(settings: &Settings) -> Result<(), Box<dyn Error>> {
    if settings.log_config.exists() {
        log4rs::init_file(&settings.log_config, Default::default()).map_err(|e| {
            format!(
                "Error initializing log4rs from {}: {e}",
                settings.log_config.display()
            )
        })?;
        log::debug!(
            "log4rs config loaded from {}",
            settings.log_config.display().to_string().on_blue()
        );
        return Ok(());
    }

    log4rs::init_config(stderr_config(LevelFilter::Warn)?)?;
    log::debug!("no log config at {}", settings.log_config.display());
    Ok(())
}

fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
