//! repo-ready — a CLI tool to automate Git project setup and GitHub
//! interactions.
//!
//! Entry point: parses the subcommand and dispatches to the command layer.

use clap::{Parser, Subcommand};
use colored::Colorize;

use repo_ready::app::App;
use repo_ready::commands;

#[derive(Parser)]
#[command(
    name = "repo-ready",
    version,
    about = "A CLI tool to automate Git project setup and GitHub interactions."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sets up Git hooks and template files.
    Init,
    /// Authenticates with GitHub using OAuth to manage access tokens.
    Login,
    /// Regenerates AVAILABLE_TEMPLATES.md from the source catalog.
    Docs,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let mut app = App::new();

    // init prints its own per-step errors; login and docs get context here.
    let result = match cli.command {
        Commands::Init => commands::init::run(&mut app).await,
        Commands::Login => match commands::login::run(&app).await {
            Ok(()) => Ok(()),
            Err(e) => {
                eprintln!("{}", format!("🚫 GitHub login failed: {}", e).red());
                Err(e.into())
            }
        },
        Commands::Docs => match commands::docs::run(&mut app) {
            Ok(()) => Ok(()),
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("🚫 Error generating or writing AVAILABLE_TEMPLATES.md: {}", e).red()
                );
                Err(e)
            }
        },
    };

    if result.is_err() {
        std::process::exit(1);
    }
}
