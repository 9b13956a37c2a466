use clap::{Args, Subcommand};

/// Cross-game account arguments
#[derive(Args, Debug)]
pub struct AccountsArgs {
    #[command(subcommand)]
    pub command: AccountsCommand,
}

#[derive(Subcommand, Debug)]
pub enum AccountsCommand {
    /// Search players by nickname
    List {
        /// Nickname or its beginning
        search: String,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Show player details
    Info {
        /// Account ids
        #[arg(required = true)]
        ids: Vec<u64>,

        /// Response fields to return
        #[arg(short, long, value_delimiter = ',')]
        fields: Vec<String>,
    },
}

/// Server status arguments
#[derive(Args, Debug)]
pub struct ServersArgs {
    #[command(subcommand)]
    pub command: ServersCommand,
}

#[derive(Subcommand, Debug)]
pub enum ServersCommand {
    /// Show online players per server
    Info {
        /// Game prefix filter (wot, wows, wotb, ...)
        #[arg(short, long)]
        game: Vec<String>,
    },
}

/// Clan arguments
#[derive(Args, Debug)]
pub struct ClansArgs {
    #[command(subcommand)]
    pub command: ClansCommand,
}

#[derive(Subcommand, Debug)]
pub enum ClansCommand {
    /// Search clans by tag or name
    List {
        /// Tag or name
        search: String,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<u32>,
    },
}

/// Raw method call arguments
#[derive(Args, Debug)]
pub struct CallArgs {
    /// Method block (e.g. accounts, tank-accounts, clan-ratings)
    pub block: String,

    /// Action within the block (e.g. list, info)
    pub action: String,

    /// Send the parameters as a POST body
    #[arg(long)]
    pub post: bool,

    /// Request parameter as key=value (repeatable)
    #[arg(short, long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,
}

/// Configuration command arguments
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., application_id)
        key: String,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Show configuration file path
    Path,
}
