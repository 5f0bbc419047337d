//! Settings for a [`Presenter`][crate::presenter::Presenter].

use std::time::Duration;

use crate::error::{Error, Result};

/// Width of a grid cell unless told otherwise. Fits a marked two digit value like `[10]` with
/// a space to spare.
pub const DEFAULT_CELL_WIDTH: usize = 5;

/// How frames are drawn and paced.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use bstviz::config::PresenterConfig;
///
/// let config = PresenterConfig::default()
///     .with_step_delay(Duration::from_millis(500))
///     .with_cell_width(3);
///
/// assert!(config.validate().is_ok());
/// assert!(config.with_cell_width(0).validate().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PresenterConfig {
    /// Pause after each visit frame so a person can follow along. Zero means no pause.
    pub step_delay: Duration,
    /// Number of characters each grid column takes up.
    pub cell_width: usize,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::ZERO,
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl PresenterConfig {
    /// Returns this config with the given pause between visit frames.
    pub fn with_step_delay(self, step_delay: Duration) -> Self {
        Self { step_delay, ..self }
    }

    /// Returns this config with the given column width.
    pub fn with_cell_width(self, cell_width: usize) -> Self {
        Self { cell_width, ..self }
    }

    /// Checks that the settings can actually be drawn with.
    pub fn validate(&self) -> Result<()> {
        if self.cell_width == 0 {
            return Err(Error::Config("cell width must be at least 1".to_string()));
        }

        Ok(())
    }
}
