//! Error types for dumpcut.

use thiserror::Error;

/// Main error type for dumpcut operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or missing configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Standard input is not usable as a dump source
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors detected while building the run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The required exclusion list was not supplied or was empty
    #[error("no tables to exclude: pass -e with a comma-separated table list")]
    MissingExclusionList,
}

/// Errors related to the standard-input source.
#[derive(Error, Debug)]
pub enum InputError {
    /// Standard input is a terminal or some other non-stream source
    #[error("standard input is not a pipe; pipe a dump in, e.g. `zcat dump.sql.gz | dumpcut -e logs`")]
    NotAPipe,

    /// The mode of standard input could not be determined
    #[error("failed to query the mode of standard input")]
    ModeQuery {
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
