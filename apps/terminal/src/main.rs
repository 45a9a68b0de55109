mod command;
mod config;
mod console;
mod main_lib;

use command::HELP;
use config::Config;
use main_lib::{build_controller, init_tracing, run_commands};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG and TB_LOG_FORMAT may come from .env, and config warnings
    // need the subscriber in place.
    dotenvy::dotenv().ok();
    init_tracing();
    let config = Config::from_env()?;
    let controller = build_controller(&config)?;

    controller.initial_load().await;
    if config.compare_on_start {
        controller.set_comparison(true).await;
    }
    println!("{}", HELP);

    run_commands(controller, BufReader::new(tokio::io::stdin())).await?;

    tracing::info!("Bye");
    Ok(())
}
