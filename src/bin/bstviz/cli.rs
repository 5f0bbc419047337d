use std::time::Duration;

use clap::Parser;
use tracing::Level;

use bstviz::config::{PresenterConfig, DEFAULT_CELL_WIDTH};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[arg(
        long,
        value_name = "VALUES",
        value_delimiter = ',',
        default_values_t = [5, 3, 7, 1, 10, 8, 4, 2],
        allow_negative_numbers = true,
        help = "Values to insert, in order"
    )]
    insert: Vec<i64>,

    #[arg(
        long,
        value_name = "VALUE",
        default_values_t = [7, 4],
        allow_negative_numbers = true,
        help = "Value to search for, may be repeated"
    )]
    search: Vec<i64>,

    #[arg(long, help = "Walk the tree in order after searching")]
    traverse: bool,

    #[arg(
        long,
        value_name = "MS",
        default_value_t = 0,
        help = "Pause after each visited node, in milliseconds"
    )]
    delay_ms: u64,

    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_CELL_WIDTH,
        help = "Characters per drawn column"
    )]
    cell_width: usize,

    #[arg(long, help = "Run in verbose mode")]
    verbose: bool,

    #[arg(long, help = "Run in debug mode")]
    debug: bool,
}

impl Cli {
    pub fn insert(&self) -> &[i64] {
        &self.insert
    }

    pub fn search(&self) -> &[i64] {
        &self.search
    }

    pub fn traverse(&self) -> bool {
        self.traverse
    }

    pub fn presenter_config(&self) -> PresenterConfig {
        PresenterConfig::default()
            .with_step_delay(Duration::from_millis(self.delay_ms))
            .with_cell_width(self.cell_width)
    }

    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else if self.verbose {
            Level::INFO
        } else {
            Level::WARN
        }
    }
}
