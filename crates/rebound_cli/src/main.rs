//! Rebound CLI
//!
//! Replays scripted drag gestures against a simulated overscroll view and
//! prints the content position after every event.
//!
//! ```text
//! rebound simulate scripts/pull_down.toml --damping 3
//! rebound defaults
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rebound_scroll::OverscrollConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod replay;
mod script;

use script::Script;

#[derive(Parser)]
#[command(name = "rebound")]
#[command(author, version, about = "Replay drag gestures against a simulated overscroll view")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a gesture script and print the content position after each event
    Simulate {
        /// Path to the gesture script (TOML)
        script: PathBuf,
        /// Override the damping divisor
        #[arg(long)]
        damping: Option<i32>,
        /// Override the rebound duration in milliseconds
        #[arg(long)]
        duration_ms: Option<u32>,
    },
    /// Print the default overscroll configuration as TOML
    Defaults,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Simulate {
            script,
            damping,
            duration_ms,
        } => {
            let script = Script::load(&script)?;

            let mut config = script.config.unwrap_or_default();
            if let Some(damping) = damping {
                config.damping = damping;
            }
            if let Some(duration_ms) = duration_ms {
                config.rebound_duration_ms = duration_ms;
            }

            tracing::info!(
                events = script.events.len(),
                damping = config.damping,
                duration_ms = config.rebound_duration_ms,
                "replaying gesture"
            );

            for step in replay::replay(&script, config)? {
                println!("{step}");
            }
        }
        Commands::Defaults => {
            let toml = toml::to_string_pretty(&OverscrollConfig::default())
                .context("Failed to serialize default config")?;
            print!("{toml}");
        }
    }

    Ok(())
}
