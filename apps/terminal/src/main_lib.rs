use std::sync::Arc;

use tickerboard_core::projection::estimate;
use tickerboard_core::DashboardController;
use tickerboard_market_data::QuoteClient;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::command::{Command, HELP};
use crate::config::Config;
use crate::console::{ConsoleChart, ConsoleNotifier};

/// Logs go to stderr so they never interleave with the table on stdout.
pub fn init_tracing() {
    let log_format = std::env::var("TB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    build_subscriber(log_format.eq_ignore_ascii_case("json"), filter, std::io::stderr).init();
}

fn build_subscriber<W>(
    json: bool,
    filter: EnvFilter,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        Box::new(
            registry.with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(writer),
            ),
        )
    } else {
        Box::new(
            registry.with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(writer),
            ),
        )
    }
}

pub fn build_controller(config: &Config) -> anyhow::Result<Arc<DashboardController>> {
    let client = QuoteClient::new(config.quotes.clone())?;
    tracing::info!(
        "Fetching quotes from {} via {}",
        config.quotes.quote_host,
        config.quotes.relay_host
    );
    Ok(Arc::new(DashboardController::new(
        config.dashboard.clone(),
        Arc::new(client),
        Arc::new(ConsoleChart),
        Arc::new(ConsoleNotifier),
    )))
}

/// Execute commands line by line until `:quit` or end of input.
///
/// Refreshes run as separate tasks so a newer request can overtake a slow
/// one. At end of input the loop waits for the tasks still in flight, so their
/// frame or notice is shown; `:quit` cancels them.
pub async fn run_commands<R>(controller: Arc<DashboardController>, input: R) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut pending = JoinSet::new();
    let mut quit = false;

    while let Some(line) = lines.next_line().await? {
        while pending.try_join_next().is_some() {}

        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                eprintln!("! {}", message);
                continue;
            }
        };

        let controller = controller.clone();
        match command {
            Command::Quit => {
                quit = true;
                break;
            }
            Command::Help => println!("{}", HELP),
            Command::Select(symbol) => {
                pending.spawn(async move { controller.select_symbol(&symbol).await });
            }
            Command::Compare(enabled) => {
                pending.spawn(async move { controller.set_comparison(enabled).await });
            }
            Command::Refresh => {
                pending.spawn(async move { controller.refresh().await });
            }
            Command::Estimate(input) => {
                match estimate(&input, chrono::Local::now().date_naive()) {
                    Ok(projection) => println!("{}", projection.summary()),
                    Err(e) => eprintln!("! {}", e),
                }
            }
        }
    }

    if quit {
        pending.shutdown().await;
    } else {
        while let Some(joined) = pending.join_next().await {
            if let Err(e) = joined {
                tracing::warn!("Refresh task did not complete: {}", e);
            }
        }
    }
    Ok(())
}
