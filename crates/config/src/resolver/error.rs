//! Error types for credential resolution.
//!
//! Responsibilities:
//! - Define error variants for every way resolution can fail.
//!
//! Does NOT handle:
//! - Recovering from I/O failures; those surface unchanged through `Io`.
//!
//! Invariants:
//! - `CredentialsUnavailable` is returned only after every tier is exhausted.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur while resolving RPC credentials.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No tier produced a usable username/password pair.
    #[error("Unable to get bitcoin rpc credentials")]
    CredentialsUnavailable,

    /// Both RPC environment variables are set but one is not valid UTF-8.
    #[error("Environment variable {var} is not valid UTF-8")]
    NonUnicodeEnvVar { var: String },

    /// `bitcoin.conf` exists but could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
