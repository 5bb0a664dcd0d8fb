//! Command line options and logging setup for the runner.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::prelude::*;

use crate::core::GameConfig;
use crate::term::GameView;
use crate::types::AUTO_DROP_INTERVAL_MS;

#[derive(Debug, Parser)]
#[command(name = "blockfall", about = "Falling-block puzzle game for the terminal")]
pub struct Cli {
    #[arg(long, help = "Seed for the piece sequence (default: from the clock)")]
    pub seed: Option<u32>,

    #[arg(
        long = "drop-ms",
        default_value_t = AUTO_DROP_INTERVAL_MS,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Automatic drop period in milliseconds"
    )]
    pub drop_ms: u32,

    #[arg(
        long = "cell-width",
        default_value_t = 2,
        value_parser = clap::value_parser!(u16).range(1..=4),
        help = "Terminal columns per board cell"
    )]
    pub cell_width: u16,

    #[arg(long = "log-file", help = "Write logs to this file (the terminal is used by the game)")]
    pub log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    pub verbose: u8,
}

impl Cli {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            seed: self.seed.unwrap_or_else(clock_seed),
            drop_interval_ms: self.drop_ms,
        }
    }

    pub fn game_view(&self) -> GameView {
        GameView::new(self.cell_width, 1)
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Install a file logger when `--log-file` is given; otherwise logging stays off.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .with(tracing_subscriber::filter::LevelFilter::from_level(
                self.log_level(),
            ))
            .try_init()
            .context("failed to install the log subscriber")?;
        Ok(())
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["blockfall"]).unwrap();
        assert_eq!(cli.drop_ms, AUTO_DROP_INTERVAL_MS);
        assert_eq!(cli.cell_width, 2);
        assert_eq!(cli.log_level(), Level::WARN);
        assert!(cli.log_file.is_none());
        assert_eq!(cli.game_view().cell_size(), (2, 1));
    }

    #[test]
    fn explicit_options() {
        let cli = Cli::try_parse_from([
            "blockfall", "--seed", "42", "--drop-ms", "500", "--cell-width", "1", "-vv",
        ])
        .unwrap();
        let config = cli.game_config();
        assert_eq!(config.seed, 42);
        assert_eq!(config.drop_interval_ms, 500);
        assert_eq!(cli.log_level(), Level::DEBUG);
        assert_eq!(cli.game_view().cell_size(), (1, 1));
    }

    #[test]
    fn zero_drop_period_is_rejected() {
        assert!(Cli::try_parse_from(["blockfall", "--drop-ms", "0"]).is_err());
        assert!(Cli::try_parse_from(["blockfall", "--cell-width", "0"]).is_err());
    }
}
