use anyhow::Result;
use clap::{Parser, Subcommand};

/// meditrace - Meditation app website
#[derive(Parser)]
#[command(name = "meditrace")]
#[command(about = "Landing page and contact relay for the Meditrace app", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = meditrace::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    meditrace::observability::init_observability(
        "meditrace",
        env!("CARGO_PKG_VERSION"),
        config.environment,
        &config.observability,
    )?;

    match cli.command {
        Commands::Serve { host, port } => meditrace::server::serve(config, host, port).await,
    }
}
