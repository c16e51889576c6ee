use anyhow::Context;
use clap::Parser;
use std::io;
use std::process;
use std::sync::Arc;

use reposearch::cli::Args;
use reposearch::config::Config;
use reposearch::headless;
use reposearch::logging::{init_tracing, LogTarget};
use reposearch::mvi::Store;
use reposearch::search::GithubClient;
use reposearch::ui::app::App;
use reposearch::ui::runtime;
use reposearch::ui::search::{SearchReducer, SearchState};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(err) = run(args).await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;

    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    let log_file = config.logging.file_path();
    let target = if args.once {
        LogTarget::Stderr
    } else {
        LogTarget::File(&log_file)
    };
    init_tracing(level, target).context("Failed to initialize logging")?;

    let client = GithubClient::new(&config.search).context("Failed to create search client")?;
    tracing::info!(
        base_url = %client.base_url(),
        config = %config_path.display(),
        "Starting reposearch"
    );
    let reducer = SearchReducer::new(Arc::new(client));
    let query = args.query.unwrap_or_else(|| config.ui.initial_query.clone());

    if args.once {
        let repos = headless::search_once(reducer, &query).await;
        let mut stdout = io::stdout().lock();
        if args.json {
            headless::write_json(&mut stdout, &repos)?;
        } else {
            headless::write_plain(&mut stdout, &repos)?;
        }
        return Ok(());
    }

    let store = Store::new(SearchState::with_query(query), reducer);
    runtime::run(App::new(store), config.ui.tick_rate())
        .await
        .context("Terminal UI failed")?;
    Ok(())
}
