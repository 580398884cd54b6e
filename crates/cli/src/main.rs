mod commands;

use std::sync::LazyLock;

use anyhow::Result;
use clap::{Parser, Subcommand};
use problem_api_core::{ApiVariant, Environment, ServerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "problem-api")]
#[command(about = "Math API demonstrating RFC 9457 problem details", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(short, long, default_value_t = ENV_CONFIG.port)]
        port: u16,
        #[arg(short = 'H', long, default_value_t = ENV_CONFIG.host.clone())]
        host: String,
        /// problem, service or writer
        #[arg(long, default_value_t = ENV_CONFIG.variant)]
        variant: ApiVariant,
        /// development or production
        #[arg(long, default_value_t = ENV_CONFIG.environment)]
        environment: Environment,
    },
    /// Print the default problem document for a status code
    Problem {
        status: u16,
        #[arg(short, long)]
        detail: Option<String>,
        #[arg(short, long)]
        instance: Option<String>,
        /// Render as plain text instead of JSON
        #[arg(long)]
        plain: bool,
    },
    /// Check whether an Accept header admits a JSON problem document
    Negotiate {
        #[arg(default_value = "")]
        accept: String,
    },
}

/// `PROBLEM_API_*` values backing the `serve` flag defaults.
static ENV_CONFIG: LazyLock<ServerConfig> = LazyLock::new(ServerConfig::from_env);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, variant, environment } => {
            commands::serve::run(port, host, variant, environment).await?;
        },
        Commands::Problem { status, detail, instance, plain } => {
            commands::inspect::run_problem(status, detail, instance, plain)?;
        },
        Commands::Negotiate { accept } => {
            commands::inspect::run_negotiate(&accept)?;
        },
    }

    Ok(())
}
