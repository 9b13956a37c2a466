pub mod args;
pub mod commands;

use clap::{Parser, Subcommand};

use crate::api::region::Region;
use crate::error::{TransportError, WgApiError};

/// Wargaming public API CLI
#[derive(Parser, Debug)]
#[command(
    name = "wgapi",
    about = "Wargaming public API client - query players, clans and servers from the terminal",
    version,
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides applied on top of the configuration file
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Region (ru, eu, na, asia)
    #[arg(short, long, global = true, env = "WGAPI_REGION")]
    pub region: Option<Region>,

    /// Application id
    #[arg(short, long, global = true, env = "WGAPI_APPLICATION_ID")]
    pub application_id: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search and view players
    #[command(alias = "a")]
    Accounts(args::AccountsArgs),

    /// Show server status
    #[command(alias = "s")]
    Servers(args::ServersArgs),

    /// Search clans
    Clans(args::ClansArgs),

    /// Call any method and print the raw data
    Call(args::CallArgs),

    /// Manage configuration
    #[command(alias = "c")]
    Config(args::ConfigArgs),
}

impl Cli {
    /// Run the CLI application
    pub async fn run() -> crate::error::Result<()> {
        let cli = Self::parse();

        // Set up logging
        let default_filter = if cli.verbose { "debug" } else { "warn" };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
            .init();

        let result = match cli.command {
            Commands::Accounts(args) => commands::accounts::execute(args, &cli.global).await,
            Commands::Servers(args) => commands::servers::execute(args, &cli.global).await,
            Commands::Clans(args) => commands::clans::execute(args, &cli.global).await,
            Commands::Call(args) => commands::call::execute(args, &cli.global).await,
            Commands::Config(args) => commands::config::execute(args),
        };

        if let Err(e) = &result {
            report_error(e, cli.verbose);
        }
        result
    }
}

fn report_error(error: &WgApiError, verbose: bool) {
    match error {
        WgApiError::Api { code, error: body } => {
            eprintln!("Error: {} ({})", body.message, code.name());
            if verbose {
                eprintln!(
                    "Code: {}, field: '{}', value: '{}'",
                    body.code, body.field, body.value
                );
            }
        }
        WgApiError::Transport(TransportError::Network(err)) => {
            eprintln!("Network error: {}", err);
        }
        WgApiError::Decode(msg) => {
            eprintln!("Error parsing response: {}", msg);
        }
        _ => eprintln!("Error: {}", error),
    }

    if let Some(hint) = error.hint() {
        eprintln!("\nHint: {}", hint);
    }
}
