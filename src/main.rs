use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// folio - personal portfolio backend
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Contact form relay for a personal portfolio site", long_about = None)]
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
    /// Submit the contact form to a running relay
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,

        /// Base URL of the relay (overrides config file)
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = folio::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    folio::observability::init_observability(
        "folio",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Contact {
            name,
            email,
            subject,
            message,
            endpoint,
        } => {
            cli::contact::send(
                config,
                cli::contact::ContactInput {
                    name,
                    email,
                    subject,
                    message,
                    endpoint,
                },
            )
            .await
        }
    }
}
