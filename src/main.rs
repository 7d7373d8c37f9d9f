use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use magic_bag::commands::{execute, Command};
use magic_bag::config::{Overrides, Settings};
use magic_bag::models::CreateItemInput;
use magic_bag::{menu, render, store};

#[derive(Parser)]
#[command(name = "bag")]
#[command(about = "Keep track of the items in your magic bag")]
struct Cli {
    /// Item file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Fail instead of starting empty when the item file is unreadable
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Menu,
    /// Put an item in the bag
    Add {
        name: String,
        /// Item type
        kind: String,
    },
    /// Show every item in the bag
    List,
    /// Show a single item
    Show { id: u64 },
    /// Take an item out of the bag
    Delete { id: u64 },
    /// Print the resolved item file location
    Path,
}

/// Initialize tracing on stderr so stdout carries only bag output
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "magic_bag=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let settings = Settings::resolve(Overrides {
        data_file: cli.file,
        strict: cli.strict,
    });
    tracing::debug!(path = %settings.data_file.display(), policy = ?settings.policy, "Resolved settings");

    let inventory = store::Inventory::new(settings.storage());

    let command = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            menu::run_menu(&inventory, stdin.lock(), io::stdout()).context("Menu I/O failed")?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Path => {
            println!("{}", settings.data_file.display());
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Add { name, kind } => Command::Add(CreateItemInput::new(name, kind)),
        Commands::List => Command::List,
        Commands::Show { id } => Command::Show(id),
        Commands::Delete { id } => Command::Delete(id),
    };

    match execute(&inventory, command) {
        Ok(outcome) => {
            print!("{}", render::render_outcome(&outcome));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
