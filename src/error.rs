//! Error types for presenting trees.
//!
//! Tree operations never fail. Errors only come from the edges of the crate: writing frames out
//! and validating configuration.

use std::io;

use thiserror::Error;

/// Errors produced while drawing or configuring a [`Presenter`][crate::presenter::Presenter].
#[derive(Error, Debug)]
pub enum Error {
    /// Writing a frame to the output failed.
    #[error("failed to write frame: {0}")]
    Io(#[from] io::Error),

    /// A configuration value is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
