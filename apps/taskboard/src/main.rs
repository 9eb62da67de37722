//! Taskboard
//!
//! Interactive terminal frontend for a remote task store: a table of tasks,
//! a modal form for create/edit with a client-side validation gate, and
//! delete behind an explicit confirmation. All data lives in the remote
//! store; the local collection is a mirror updated only from confirmed
//! responses.

use clap::Parser;
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::FromEnv;
use domain_tasks::{HttpTaskRepository, TaskService};
use eyre::Result;
use tokio::io::BufReader;
use tracing::info;

mod app;
mod config;
mod controller;
mod view;

use app::Taskboard;
use config::Config;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Manage tasks against the remote task store")]
struct Cli {
    /// Base URL of the task store; overrides TASKBOARD_API_URL
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    init_tracing(&config.environment);

    if let Some(api_url) = cli.api_url {
        config.api_base_url = api_url;
    }

    info!(api = %config.api_base_url, "Using remote task store");

    let repository = HttpTaskRepository::new(config.api_base_url.clone());
    let service = TaskService::new(repository);

    let mut board = Taskboard::new(service);
    board.run(BufReader::new(tokio::io::stdin())).await
}
