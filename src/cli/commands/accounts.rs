use crate::api::blocks::Accounts;
use crate::api::types::RequestOptions;
use crate::cli::args::{AccountsArgs, AccountsCommand};
use crate::cli::GlobalOptions;
use crate::error::Result;

use super::{create_client, print_json};

/// Execute accounts command
pub async fn execute(args: AccountsArgs, global: &GlobalOptions) -> Result<()> {
    let client = create_client(global)?;
    let accounts = client.method_block::<Accounts>()?;

    match args.command {
        AccountsCommand::List { search, limit } => {
            let found = accounts.list(&search, limit).await?;
            if found.is_empty() {
                log::info!("No players match '{}'", search);
            }
            print_json(&found)
        }
        AccountsCommand::Info { ids, fields } => {
            let options = RequestOptions::new().fields(fields);
            let players = accounts.info(&ids, &options).await?;
            print_json(&players)
        }
    }
}
