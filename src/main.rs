use clap::Parser;
use gh_dispatch::cli::Cli;
use gh_dispatch::shared::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    Cli::parse().run().await
}
