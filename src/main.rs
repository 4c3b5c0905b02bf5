//! Lala Trie - command line driver.
//!
//! Loads configuration, initializes logging and runs the synthetic workload
//! against the trie, or validates and generates configuration files.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lala_trie_lib::config::{self, ConfigLoader, LalaConfig, LogConfig, Validate};
use lala_trie_lib::error::{report_error, ErrorContext, LalaError};
use lala_trie_lib::workload::run_workload;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Command line arguments for the Lala Trie driver.
#[derive(Parser, Debug)]
#[clap(name = "Lala Trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Fill a trie with generated keys and read them back
    Run {
        /// Number of keys to generate (overrides the configuration)
        #[clap(short, long)]
        keys: Option<usize>,

        /// Print the report as JSON
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system from the log configuration.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let fmt_layer = if log.json {
        fmt::layer()
            .json()
            .with_file(log.source_location)
            .with_line_number(log.source_location)
            .boxed()
    } else {
        fmt::layer()
            .pretty()
            .with_file(log.source_location)
            .with_line_number(log.source_location)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .try_init()
        .context("Failed to set global tracing subscriber")
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let command = args.command.unwrap_or(Command::Run {
        keys: None,
        json: false,
    });

    match command {
        Command::Run { keys, json } => {
            let mut config = loader.load().context("Failed to load configuration")?;
            init_logging(&config.log)?;
            lala_trie_lib::init();

            if let Some(keys) = keys {
                config.workload.key_count = keys;
                config
                    .workload
                    .validate()
                    .context("Invalid --keys override")?;
            }

            info!(
                keys = config.workload.key_count,
                case_sensitive = config.trie.case_sensitive,
                "Starting workload"
            );

            let report = match run_workload(&config.workload, &config.trie) {
                Ok(report) => report,
                Err(e) => {
                    let message = e.to_string();
                    report_error(ErrorContext::new(e, "workload").with_span_trace());
                    anyhow::bail!(message);
                }
            };

            if json {
                let rendered =
                    serde_json::to_string_pretty(&report).map_err(LalaError::Serialization)?;
                println!("{rendered}");
            } else {
                println!(
                    "Trie: {} keys, {} nodes ({} bytes each), insert {:.2} ms, lookup {:.2} ms",
                    report.keys_inserted,
                    report.trie.nodes,
                    report.trie.node_size_bytes,
                    report.trie_timings.insert_ms,
                    report.trie_timings.lookup_ms
                );
                if let Some(baseline) = report.hash_map_timings {
                    println!(
                        "HashMap: insert {:.2} ms, lookup {:.2} ms",
                        baseline.insert_ms, baseline.lookup_ms
                    );
                }
            }
            Ok(())
        }
        Command::Validate => {
            init_logging(&LogConfig::default())?;
            info!("Validating configuration");
            loader.load().context("Configuration validation failed")?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            info!("Generating default configuration");

            config::write_config(&LalaConfig::default(), &output)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
