mod cli;
mod context;
mod handlers;
mod output;
mod prompt;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use scrumboard_domain::Tag;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("SCRUMBOARD_DEBUG_LOG") {
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
        // stdout carries the JSON responses
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::output_error(&format!("{:#}", e));
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = CliContext::load(&cli);

    match cli.command {
        Commands::Board(board_cmd) => {
            handlers::board::handle(&ctx, board_cmd.action).await?;
        }
        Commands::List(list_cmd) => {
            handlers::list::handle(&ctx, list_cmd.action).await?;
        }
        Commands::Card(card_cmd) => {
            handlers::card::handle(&ctx, card_cmd.action).await?;
        }
        Commands::Profile(profile_cmd) => {
            handlers::profile::handle(&ctx, profile_cmd.action).await?;
        }
        Commands::Session(session_cmd) => {
            handlers::session::handle(&ctx, session_cmd.action).await?;
        }
        Commands::Logout => {
            let controller = ctx.controller(false).await?;
            let user_id = controller.current_user().id;
            controller.logout().await?;
            output::output_success(serde_json::json!({"logged_out": user_id}));
        }
        Commands::Tags => {
            output::output_list(Tag::catalog().to_vec());
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "scrumboard", &mut std::io::stdout());
        }
    }

    Ok(())
}
