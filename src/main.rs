use std::io::stdout;

use anyhow::Result;
use clap::Parser;
use log::debug;
use url_status_checker::{check::Checker, cli::Args, run::check_urls};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.checker_config().await?;
    let checker = Checker::new(config)?;
    debug!("Starting with {checker:#?}.");
    check_urls(&checker, &args.urls, &mut stdout()).await?;
    Ok(())
}
