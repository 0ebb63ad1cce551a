//! CryptoBuddy
//!
//! Keyword-driven crypto chatbot over a fixed asset table, with a terminal
//! dashboard and a few small console tools.

pub mod app;
pub mod chat;
pub mod config;
pub mod data;
pub mod engine;
pub mod tools;
pub mod ui;

use crate::app::{App, LogSink, init_logging};
use clap::{Parser, Subcommand};
use color_eyre::Result;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cryptobuddy")]
#[command(version, about = "Find a green and growing crypto", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load the asset table from a JSON file instead of the built-in one
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat on the console (default)
    Chat,

    /// Interactive asset table with a chat popup
    Tui,

    /// Basic arithmetic; prompts when no operands are given
    Calc {
        #[arg(allow_hyphen_values = true)]
        lhs: Option<String>,
        operation: Option<String>,
        #[arg(allow_hyphen_values = true)]
        rhs: Option<String>,
    },

    /// Uppercase a text file and append its word count
    Transform {
        /// Input file; prompted for when omitted
        input: Option<PathBuf>,

        #[arg(short, long, default_value = "output.txt")]
        output: PathBuf,
    },

    /// Walk through a few list operations
    Lists,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Chat);
    let sink = match command {
        Commands::Tui => LogSink::DebugFile,
        _ => LogSink::Stderr,
    };
    init_logging(cli.verbose, sink);

    match command {
        Commands::Chat => App::load(cli.table.as_deref())?.chat(),
        Commands::Tui => App::load(cli.table.as_deref())?.dashboard(),
        Commands::Calc {
            lhs,
            operation,
            rhs,
        } => {
            let operands = match (lhs, operation, rhs) {
                (Some(lhs), Some(op), Some(rhs)) => Some((lhs, op, rhs)),
                (None, None, None) => None,
                _ => color_eyre::eyre::bail!("calc needs either no operands or all three: <a> <op> <b>"),
            };
            App::calc(operands)
        }
        Commands::Transform { input, output } => App::transform(input, &output),
        Commands::Lists => {
            App::lists();
            Ok(())
        }
    }
}
