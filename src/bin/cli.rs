//! Cabin Watcher CLI
//!
//! Local execution entry point: one-shot checks, continuous watching, and
//! configuration/history inspection.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cabin_watcher::{
    error::Result,
    models::Config,
    pipeline::{run_batch, run_watch},
    report::{ConsolePresenter, DesktopPresenter, Presenter},
    services::AvailabilityClient,
    storage::{LocalHistory, SnapshotStorage},
};

/// Cabin Watcher - DNT cabin availability monitor
#[derive(Parser, Debug)]
#[command(
    name = "cabin-watcher",
    version,
    about = "Monitors DNT cabin booking calendars for newly opened availability"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "cabins.toml")]
    config: PathBuf,

    /// Override the snapshot history directory
    #[arg(long)]
    history_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log notifications instead of posting them to the desktop
    #[arg(long)]
    no_notify: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check all configured cabins once
    Check,

    /// Check continuously, sleeping between batches
    Watch {
        /// Override the sleep interval between batches, in seconds
        #[arg(long)]
        interval_secs: Option<u64>,
    },

    /// Validate configuration and print the cabin roster
    Validate,

    /// Show the latest snapshot per cabin without fetching
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    if let Some(dir) = &cli.history_dir {
        config.history.dir = dir.display().to_string();
    }

    let storage = LocalHistory::new(&config.history.dir);
    let presenter: Box<dyn Presenter> = if cli.no_notify {
        Box::new(ConsolePresenter::new())
    } else {
        Box::new(DesktopPresenter::new())
    };

    match cli.command {
        Command::Check => {
            let fetcher = AvailabilityClient::new(&config.watcher)?;
            run_batch(&config, &fetcher, &storage, presenter.as_ref()).await?;
        }

        Command::Watch { interval_secs } => {
            if let Some(secs) = interval_secs {
                config.watcher.interval_secs = secs;
            }
            let fetcher = AvailabilityClient::new(&config.watcher)?;
            run_watch(&config, &fetcher, &storage, presenter.as_ref()).await?;
        }

        Command::Validate => {
            config.validate()?;
            println!("Configuration OK: {} cabin(s)", config.cabins.len());
            for cabin in &config.cabins {
                println!("  {} (id {})  {}", cabin.name, cabin.id()?, cabin.url);
                if !cabin.description.is_empty() {
                    println!("      {}", cabin.description);
                }
            }
        }

        Command::Info => {
            config.validate()?;
            for cabin in &config.cabins {
                let cabin_id = cabin.id()?;
                let latest = storage.load_latest_two(&cabin_id).await?;
                match latest.last() {
                    Some(snapshot) => println!(
                        "{} (id {cabin_id}): {} date(s) captured at {} (key {})",
                        cabin.name,
                        snapshot.count,
                        snapshot.captured_at.format("%Y-%m-%d %H:%M:%S"),
                        snapshot.key()
                    ),
                    None => println!("{} (id {cabin_id}): no snapshots yet", cabin.name),
                }
            }
        }
    }

    Ok(())
}
