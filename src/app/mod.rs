mod logging;

pub use logging::{LogSink, init_logging};

use color_eyre::{Result, eyre::eyre};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::chat::{ChatBot, run_console};
use crate::data::AssetTable;
use crate::engine::RecommendationEngine;
use crate::tools::{calculator, list_walkthrough, transform_file};
use crate::ui::TuiApp;

#[derive(Debug, Clone)]
pub struct App {
    bot: ChatBot,
}

impl App {
    pub fn new(table: AssetTable) -> Self {
        log::info!("Starting with {} assets", table.len());
        if table.is_empty() {
            log::warn!("Asset table is empty, recommendations are unavailable");
        }
        Self {
            bot: ChatBot::new(RecommendationEngine::new(table)),
        }
    }

    pub fn load(table_path: Option<&Path>) -> Result<Self> {
        let table = match table_path {
            Some(path) => AssetTable::load(path).map_err(|e| eyre!("{:#}", e))?,
            None => AssetTable::builtin(),
        };
        Ok(Self::new(table))
    }

    pub fn chat(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_console(&self.bot, stdin.lock(), stdout.lock())?;
        Ok(())
    }

    pub fn dashboard(self) -> Result<()> {
        let terminal = ratatui::init();
        let app_result = TuiApp::new(self.bot).run(terminal);
        ratatui::restore();
        app_result
    }

    pub fn calc(operands: Option<(String, String, String)>) -> Result<()> {
        match operands {
            Some((lhs, op, rhs)) => {
                for line in calculator::evaluate(&lhs, &rhs, &op) {
                    println!("{}", line);
                }
            }
            None => calculator::run_interactive(io::stdin().lock(), io::stdout().lock())?,
        }
        Ok(())
    }

    pub fn transform(input: Option<PathBuf>, output: &Path) -> Result<()> {
        let input = match input {
            Some(path) => path,
            None => PathBuf::from(prompt_line(" Enter input file name : ")?),
        };

        match transform_file(&input, output) {
            Ok(summary) => println!("{}", summary.message()),
            Err(e) => {
                log::warn!("Transform aborted at {}: {:?}", e.path().display(), e);
                println!("{}", e);
            }
        }
        Ok(())
    }

    pub fn lists() {
        let walk = list_walkthrough();
        log::info!("Final list: {:?}", walk.items);
        match walk.index_of_30 {
            Some(index) => println!("{}", index),
            None => println!("30 is not in the list"),
        }
    }
}

fn prompt_line(prompt: &str) -> io::Result<String> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", prompt)?;
    out.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
