use anyhow::Result;
use clap::{Parser, Subcommand};
use promptsynth::StateError;
use std::io::{self, Write};

mod commands;
mod config;
mod render;
mod version;
use commands::prompt;
use config::PromptOptions;
use version::{NAME, VERSION};

#[derive(Parser)]
#[command(name = NAME)]
#[command(about = "Compact git repository state for shell prompts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check health and version
    Health,

    /// Print the prompt segment (default)
    Prompt {
        /// Directory to inspect (defaults to current)
        #[arg(default_value = ".")]
        dir: String,
    },

    /// Print the repository snapshot as JSON
    Status {
        /// Directory to inspect (defaults to current)
        #[arg(default_value = ".")]
        dir: String,
    },

    /// Print every snapshot field, for debugging
    Debug {
        /// Directory to inspect (defaults to current)
        #[arg(default_value = ".")]
        dir: String,
    },
}

fn init_logging() {
    let env = env_logger::Env::new().filter_or("PROMPTSYNTH_LOG", "warn");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

/// Unreadable repositories end the process; a half-filled prompt would mislead.
fn or_exit<T>(result: Result<T, StateError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Prompt { dir: ".".into() });

    match command {
        Commands::Health => {
            println!(r#"{{"ok":true,"version":"{}"}}"#, VERSION);
        }

        Commands::Prompt { dir } => {
            let options = PromptOptions::from_env();
            if let Some(line) = or_exit(prompt::prompt(&dir, &options)) {
                let mut stdout = io::stdout().lock();
                stdout.write_all(line.as_bytes())?;
                stdout.flush()?;
            }
        }

        Commands::Status { dir } => {
            if let Some(snapshot) = or_exit(prompt::snapshot(&dir)) {
                println!("{}", serde_json::to_string(&snapshot)?);
            }
        }

        Commands::Debug { dir } => {
            if let Some(dump) = or_exit(prompt::debug(&dir)) {
                print!("{}", dump);
            }
        }
    }

    Ok(())
}
