use crate::api::blocks::Clans;
use crate::api::types::RequestOptions;
use crate::cli::args::{ClansArgs, ClansCommand};
use crate::cli::GlobalOptions;
use crate::error::Result;

use super::{create_client, print_json};

/// Execute clans command
pub async fn execute(args: ClansArgs, global: &GlobalOptions) -> Result<()> {
    let client = create_client(global)?;
    let clans = client.method_block::<Clans>()?;

    match args.command {
        ClansCommand::List { search, limit } => {
            let found = clans
                .list(&search, limit, &RequestOptions::default())
                .await?;
            print_json(&found)
        }
    }
}
