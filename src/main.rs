use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "typemaster")]
#[command(about = "Typing progression, milestones and achievement certificates")]
#[command(version)]
struct Cli {
    /// Path to the profile JSON (defaults to ~/.typemaster/profile.json)
    #[arg(short, long, global = true)]
    profile: Option<PathBuf>,

    /// Path to the config file (defaults to .typemaster/config.toml, then ~/.typemaster/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show rank, level progress and recent activity
    Dashboard,

    /// Show the rank ladder
    Levels,

    /// List every milestone with its unlock state
    Milestones,

    /// Export the certificate for an unlocked milestone as PDF
    Certificate {
        /// Milestone id, e.g. `speed-100`
        milestone_id: String,

        /// Output directory (overrides `export.output_dir`)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Show recent test results, most recent first
    History {
        /// Maximum number of results to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let ctx = cli::Context::load(cli.profile, cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Dashboard) | None => {
            cli::dashboard::dashboard_command(&ctx)?;
        }
        Some(Commands::Levels) => {
            cli::levels::levels_command(&ctx)?;
        }
        Some(Commands::Milestones) => {
            cli::milestones::milestones_command(&ctx)?;
        }
        Some(Commands::Certificate { milestone_id, out }) => {
            cli::certificate::certificate_command(&ctx, &milestone_id, out).await?;
        }
        Some(Commands::History { limit }) => {
            cli::history::history_command(&ctx, limit)?;
        }
    }

    Ok(())
}
