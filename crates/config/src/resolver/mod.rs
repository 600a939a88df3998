//! Bitcoin RPC credential resolution.
//!
//! Responsibilities:
//! - Resolve RPC credentials from environment variables, `bitcoin.conf`, and a
//!   caller-supplied fallback, in that order.
//! - Provide a builder-pattern `CredentialResolver` and a `get_credentials`
//!   shortcut.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Parsing `bitcoin.conf` (see conf.rs).
//! - Locating the platform data directory (see paths.rs).
//!
//! Invariants / Assumptions:
//! - The first tier that yields a pair wins; later tiers are never consulted.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::{CredentialResolver, get_credentials};
pub use env::env_var_non_empty;
pub use error::ConfigError;
