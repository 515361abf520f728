//! Command-line front end for the on-chain task list.
//!
//! Usage:
//!
//! ```text
//! todo --contract <address> list
//! todo --contract <address> --account <address> create --title <title> --description <text>
//! todo --contract <address> --account <address> delete <id>
//! ```
//!
//! Every flag can also be supplied through its `TODO_*` environment
//! variable. Each command finishes by resyncing and printing the task list.

use clap::{Parser, Subcommand};
use mockable::DefaultClock;
use rollup_todo::config::{AppConfig, ConfigError};
use rollup_todo::render::{RenderError, render_task_list};
use rollup_todo::task::{
    adapters::{
        http::{HttpContentFetcher, MoralisContentStore},
        json_rpc::JsonRpcTodoContract,
        memory::StaticWallet,
    },
    domain::{TaskDomainError, TaskId, ViewMode},
    services::{TaskBoard, TaskBoardError, TaskLifecycleService, TaskSyncService},
};
use rollup_todo::telemetry::{self, TelemetryError};
use std::io::Write;
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::info;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type Board = TaskBoard<
    JsonRpcTodoContract,
    HttpContentFetcher,
    JsonRpcTodoContract,
    MoralisContentStore,
    StaticWallet,
    DefaultClock,
>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error(transparent)]
    InvalidTaskId(#[from] TaskDomainError),
    #[error(transparent)]
    Board(#[from] TaskBoardError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

#[derive(Debug, Parser)]
#[command(name = "todo", version, about = "Manage an on-chain task list")]
struct Cli {
    #[command(flatten)]
    config: AppConfig,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Resync and print the task list.
    List,
    /// Upload a description, create the task, and print the list.
    Create {
        /// Task title stored on chain.
        #[arg(long)]
        title: String,
        /// Description text uploaded to the content store.
        #[arg(long)]
        description: String,
    },
    /// Delete a task and print the list.
    Delete {
        /// Decimal task identifier.
        id: String,
    },
}

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    run(cli).map_err(Into::into)
}

fn run(cli: Cli) -> Result<(), CliError> {
    telemetry::init(telemetry::DEFAULT_DIRECTIVE, cli.verbose)?;
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::RuntimeInit)?;
    runtime.block_on(execute(cli.config, cli.command))
}

fn build_board(config: &AppConfig) -> Result<Board, CliError> {
    let contract = Arc::new(JsonRpcTodoContract::new(
        config.rpc_url.clone(),
        config.contract()?,
        config.poll_interval()?,
    ));
    let wallet = StaticWallet::from_option(config.wallet_account()?);
    let content_store = MoralisContentStore::new(
        &config.content_api_url,
        config.api_key.clone().unwrap_or_default(),
    );

    let sync = TaskSyncService::new(Arc::clone(&contract), Arc::new(HttpContentFetcher::new()));
    let lifecycle = TaskLifecycleService::new(
        contract,
        Arc::new(content_store),
        Arc::new(wallet),
        Arc::new(DefaultClock),
    );
    Ok(TaskBoard::new(sync, lifecycle))
}

async fn execute(config: AppConfig, command: Command) -> Result<(), CliError> {
    if matches!(command, Command::Create { .. }) {
        config.require_api_key()?;
    }
    let board = build_board(&config)?;

    match command {
        Command::List => board.show(ViewMode::ViewTasks).await?,
        Command::Create { title, description } => {
            let receipt = board.create_task(title, description).await?;
            info!(transaction = %receipt.transaction_hash(), "task created");
        }
        Command::Delete { id } => {
            let receipt = board.delete_task(TaskId::new(id)?).await?;
            info!(transaction = %receipt.transaction_hash(), "task deleted");
        }
    }

    let snapshot = board.snapshot()?;
    let rendered = render_task_list(&snapshot.tasks)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .map_err(CliError::Output)?;
    stdout.flush().map_err(CliError::Output)
}
