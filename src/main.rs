use wgapi::cli;
use wgapi::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cli::Cli::run().await
}
