use anyhow::{ Context, Result };
use clap::Parser;
use log::{ debug, info };

use sitesmoke::cli::{ commands, Commands, SmokeCli };
use sitesmoke::{ HttpPageFetcher, SmokeConfig };

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Pick up SITESMOKE_* variables from a local .env before clap reads them
    let dotenv_loaded = dotenv::dotenv().is_ok();

    // Parse the command line arguments
    let cli = SmokeCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);
    if dotenv_loaded {
        debug!("Loaded environment variables from .env file");
    }

    let config = SmokeConfig::load(cli.config.as_deref(), &cli.overrides()).context(
        "Failed to load configuration"
    )?;
    debug!("Effective configuration: {:?}", config);

    match &cli.command {
        None | Some(Commands::Run) => {
            let fetcher = HttpPageFetcher::new(&config.http_settings())?;
            commands::run::execute(&fetcher, &config).await;
        }

        Some(Commands::Pages) => {
            commands::pages::execute(&config);
        }

        Some(Commands::Scan { file }) => {
            commands::scan::execute(file, config.max_issues_shown)?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        "off" => log::LevelFilter::Off,
        _ => log::LevelFilter::Warn,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
