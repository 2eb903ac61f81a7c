use anyhow::{bail, Context};
use clap::Parser;

use ghsearch::args::Cli;
use ghsearch::config::SearchConfig;
use ghsearch::logging;
use ghsearch::search::{SearchOutcome, SearchService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(query) = &cli.query {
        logging::init_stderr();
        let config = cli.load_config().context("failed to load configuration")?;
        return run_once(&config.search, query, cli.json).await;
    }

    let log_path = logging::default_log_path();
    logging::init_file(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;
    let config = cli.load_config().context("failed to load configuration")?;
    let service = SearchService::from_config(&config.search)?;

    ghsearch::ui::run(service, config.ui)
        .await
        .context("terminal UI failed")
}

async fn run_once(config: &SearchConfig, query: &str, json: bool) -> anyhow::Result<()> {
    let service = SearchService::from_config(config)?;
    service.search(query).wait().await;

    match service.current() {
        SearchOutcome::Success { items } if json => {
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        SearchOutcome::Success { items } if items.is_empty() => println!("No users found"),
        SearchOutcome::Success { items } => {
            for item in &items {
                println!("{}\t{}\t{}", item.id(), item.handle(), item.avatar_image_url());
            }
        }
        SearchOutcome::Idle => println!("Nothing to search for"),
        SearchOutcome::Failed { message } => bail!(message),
        SearchOutcome::Loading => bail!("search did not complete"),
    }
    Ok(())
}
