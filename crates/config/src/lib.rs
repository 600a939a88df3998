//! Bitcoin Core RPC credential resolution.
//!
//! This crate reads a node's `bitcoin.conf` and resolves the RPC username and
//! password from environment variables, the config file, and a caller-supplied
//! fallback, in that order.

pub mod conf;
pub mod constants;
pub mod credentials;
pub mod paths;
mod resolver;

pub use conf::{BitcoinConf, load_config};
pub use credentials::{CredentialSource, FallbackCredentials, RpcCredentials};
pub use paths::{OsKind, default_config_dir, default_config_dir_for};
pub use resolver::{ConfigError, CredentialResolver, env_var_non_empty, get_credentials};
