mod cli;
mod output;

use std::sync::Arc;
use std::time::Duration;

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands};
use jobdash_api::{PostSource, WpClient};
use jobdash_core::AppConfig;
use jobdash_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    let config = AppConfig::load();

    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.effective_base_url().to_string());
    let per_page = cli.per_page.unwrap_or_else(|| config.effective_per_page());
    let recency_days = cli.days.unwrap_or_else(|| config.effective_recency_days());

    match cli.command {
        None => {
            let client = WpClient::new(&base_url, per_page, recency_days)?;
            let debounce = Duration::from_millis(config.effective_debounce_ms());
            let mut app = App::new(Arc::new(client), debounce);
            app.run().await?;
        }
        Some(Commands::Search { query, page }) => {
            let client = WpClient::new(&base_url, per_page, recency_days)?;
            match client.fetch_page(query.as_deref().unwrap_or(""), page).await {
                Ok(result) => output::output_posts(result),
                Err(e) => output::output_error(&e.to_string()),
            }
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "jobdash", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("JOBDASH_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
