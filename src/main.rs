use anyhow::Result;
use clap::{Parser, Subcommand};

/// spm - company landing page and contact relay
#[derive(Parser)]
#[command(name = "spm")]
#[command(about = "Landing page server with a contact form e-mail relay", long_about = None)]
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

    let config = spm::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    spm::observability::init_observability(
        "spm",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => spm::server::serve(config, host, port).await,
    }
}
