//! Taskdeck — command-line client for the task/login API.
//!
//! One subcommand per action: login, create-user, tasks, new-task,
//! deauth. Responses are echoed to stdout as pretty-printed JSON; the
//! authority token persists across runs in a token file.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use taskdeck::api::{ApiClient, ApiError};
use taskdeck::display::DisplayBuffer;
use taskdeck::store::{self, FileTokenStore};
use taskdeck::types::{Credentials, TaskInput};

#[derive(Parser, Debug)]
#[command(name = "taskdeck", about = "Taskdeck task API client")]
struct Cli {
    #[arg(long, env = "TASKDECK_BASE_URL", default_value = "http://127.0.0.1:7878")]
    base_url: String,

    /// Token file location; defaults to `$HOME/.taskdeck/authority`.
    #[arg(long, env = "TASKDECK_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    /// Log request diagnostics to stderr.
    #[arg(long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Authenticate and store the authority token.
    Login(CredentialArgs),
    /// Register a new user account.
    CreateUser(CredentialArgs),
    /// List the authenticated user's tasks.
    Tasks,
    /// Create a task assigned today.
    NewTask(NewTaskArgs),
    /// Clear the stored authority token.
    Deauth,
}

#[derive(Args, Debug)]
struct CredentialArgs {
    #[arg(long, env = "TASKDECK_USERNAME")]
    username: String,

    #[arg(long, env = "TASKDECK_PASSWORD")]
    password: String,
}

#[derive(Args, Debug)]
struct NewTaskArgs {
    /// Due date, `YYYY-MM-DD`.
    #[arg(long)]
    due: NaiveDate,

    #[arg(long)]
    title: String,

    #[arg(long, default_value = "")]
    description: String,

    #[arg(long, default_value_t = true)]
    recurring_month: bool,

    #[arg(long, default_value_t = false)]
    recurring_n: bool,

    #[arg(long, default_value = "")]
    recurring_stop: String,
}

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let token_path = cli
        .token_file
        .clone()
        .unwrap_or_else(store::default_token_path);
    let client = ApiClient::new(cli.base_url.clone(), FileTokenStore::new(token_path));

    match cli.command {
        Command::Login(args) => show(&client.login(&credentials(args)).await?),
        Command::CreateUser(args) => show(&client.create_user(&credentials(args)).await?),
        Command::Tasks => show(&client.list_tasks().await?),
        Command::NewTask(args) => show(&client.create_task(&task_input(args)).await?),
        Command::Deauth => client.deauth(),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn credentials(args: CredentialArgs) -> Credentials {
    Credentials {
        username: args.username,
        password: args.password,
    }
}

fn task_input(args: NewTaskArgs) -> TaskInput {
    TaskInput {
        due_date: args.due,
        title: args.title,
        description: args.description,
        recurring_month: args.recurring_month,
        recurring_n: args.recurring_n,
        recurring_stop: args.recurring_stop,
    }
}

fn show(body: &Value) -> Result<(), ApiError> {
    let mut buffer = DisplayBuffer::new();
    buffer.show(body)?;
    println!("{}", buffer.contents());
    Ok(())
}
