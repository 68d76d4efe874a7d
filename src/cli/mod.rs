use clap::{ Parser, Subcommand };
use std::path::PathBuf;

use crate::config::ConfigOverrides;

pub mod commands;
pub mod ui;

#[derive(Parser, Debug)]
#[command(
    name = "sitesmoke",
    about = "Smoke-tests a local website: load times plus structural HTML checks",
    version,
    long_about = None,
    after_help = "ENVIRONMENT VARIABLES:\n\
        SITESMOKE_CONFIG        Path to a YAML config file\n\
        SITESMOKE_BASE_URL      Server the pages are fetched from\n\
        SITESMOKE_TIMEOUT       Per-request timeout (seconds)\n\
        SITESMOKE_DELAY_MS      Pause between pages (milliseconds)\n\
        SITESMOKE_USER_AGENT    User-Agent header value\n\
        SITESMOKE_LOG_LEVEL     Log level"
)]
pub struct SmokeCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, env = "SITESMOKE_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SITESMOKE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL the pages are fetched from
    #[arg(long, global = true, env = "SITESMOKE_BASE_URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "SITESMOKE_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Pause between pages in milliseconds
    #[arg(long, global = true, env = "SITESMOKE_DELAY_MS")]
    pub delay_ms: Option<u64>,

    /// User-Agent header sent with each request
    #[arg(long, global = true, env = "SITESMOKE_USER_AGENT")]
    pub user_agent: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test every page and print the report (the default)
    Run,

    /// List the pages a run tests and the URLs they resolve to
    Pages,

    /// Scan a local HTML file without fetching anything
    Scan {
        /// Path to the HTML file
        file: PathBuf,
    },
}

impl SmokeCli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
            delay_ms: self.delay_ms,
            user_agent: self.user_agent.clone(),
        }
    }
}
