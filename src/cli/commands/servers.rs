use crate::api::blocks::Servers;
use crate::cli::args::{ServersArgs, ServersCommand};
use crate::cli::GlobalOptions;
use crate::error::Result;

use super::{create_client, print_json};

/// Execute servers command
pub async fn execute(args: ServersArgs, global: &GlobalOptions) -> Result<()> {
    let client = create_client(global)?;
    let servers = client.method_block::<Servers>()?;

    match args.command {
        ServersCommand::Info { game } => {
            let games: Vec<&str> = game.iter().map(String::as_str).collect();
            print_json(&servers.info(&games).await?)
        }
    }
}
