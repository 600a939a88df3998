//! Credential resolver builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `CredentialResolver` over the three credential tiers.
//! - Apply the tier order: environment, `bitcoin.conf`, fallback.
//!
//! Does NOT handle:
//! - Environment variable reading (delegated to env.rs).
//! - `bitcoin.conf` parsing (delegated to conf.rs).
//!
//! Invariants / Assumptions:
//! - Each `resolve()` re-reads the environment and re-parses the file; nothing is cached.
//! - The config-file tier only checks that both keys are present. An empty
//!   `rpcpassword=` still wins over the fallback.
//! - An I/O error from the config-file tier stops resolution; the fallback is not consulted.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};

use super::env::credentials_from_env;
use super::error::ConfigError;
use crate::conf::{BitcoinConf, load_config};
use crate::constants::{CONF_RPC_PASSWORD_KEY, CONF_RPC_USER_KEY, ENV_DOTENV_DISABLED};
use crate::credentials::{CredentialSource, FallbackCredentials, RpcCredentials};
use crate::paths::default_config_dir;

/// Resolves Bitcoin RPC credentials from the environment, `bitcoin.conf`, and a fallback.
#[derive(Debug, Clone, Default)]
pub struct CredentialResolver {
    config_dir: Option<PathBuf>,
    fallback: Option<FallbackCredentials>,
}

impl CredentialResolver {
    /// Create a resolver using the platform default config directory and no fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a .env file if present.
    ///
    /// The file is looked up in the current directory and then in each parent
    /// directory; the first `.env` found is loaded. Variables already set in the
    /// process environment are not overwritten.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read `bitcoin.conf` from `dir` instead of the platform default.
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    /// Set the credentials consulted when neither the environment nor `bitcoin.conf` has a pair.
    pub fn with_fallback(mut self, fallback: impl Into<FallbackCredentials>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// The directory `bitcoin.conf` will be read from, if any.
    pub fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone().or_else(default_config_dir)
    }

    /// Resolve credentials, taking the first tier that yields a pair.
    ///
    /// # Errors
    ///
    /// - `ConfigError::NonUnicodeEnvVar` if both RPC env vars are set and one is not UTF-8.
    /// - `ConfigError::Io` if `bitcoin.conf` exists but cannot be read.
    /// - `ConfigError::CredentialsUnavailable` if no tier yields a pair.
    pub fn resolve(&self) -> Result<RpcCredentials, ConfigError> {
        if let Some(creds) = credentials_from_env()? {
            tracing::debug!(source = %creds.source(), "Resolved bitcoin rpc credentials");
            return Ok(creds);
        }

        match self.config_dir() {
            Some(dir) => {
                let conf = load_config(&dir)?;
                if let Some(creds) = credentials_from_conf(&conf) {
                    tracing::debug!(
                        source = %creds.source(),
                        config_dir = %dir.display(),
                        "Resolved bitcoin rpc credentials"
                    );
                    return Ok(creds);
                }
            }
            None => {
                tracing::debug!("No config directory for this platform, skipping bitcoin.conf");
            }
        }

        if let Some(creds) = self.fallback.as_ref().and_then(credentials_from_fallback) {
            tracing::debug!(source = %creds.source(), "Resolved bitcoin rpc credentials");
            return Ok(creds);
        }

        Err(ConfigError::CredentialsUnavailable)
    }
}

/// Resolve credentials from the environment, `<config_dir>/bitcoin.conf`, then `fallback`.
///
/// `config_dir` defaults to the platform data directory when `None`.
pub fn get_credentials(
    config_dir: Option<&Path>,
    fallback: Option<&FallbackCredentials>,
) -> Result<RpcCredentials, ConfigError> {
    let mut resolver = CredentialResolver::new();
    if let Some(dir) = config_dir {
        resolver = resolver.with_config_dir(dir);
    }
    if let Some(fallback) = fallback {
        resolver = resolver.with_fallback(fallback.clone());
    }
    resolver.resolve()
}

/// Presence of both keys is enough; values may be empty.
fn credentials_from_conf(conf: &BitcoinConf) -> Option<RpcCredentials> {
    let username = conf.get(CONF_RPC_USER_KEY)?;
    let password = conf.get(CONF_RPC_PASSWORD_KEY)?;

    Some(RpcCredentials::new(
        username.to_string(),
        SecretString::new(password.into()),
        CredentialSource::ConfigFile,
    ))
}

fn credentials_from_fallback(fallback: &FallbackCredentials) -> Option<RpcCredentials> {
    if fallback.rpc_user.is_empty() || fallback.rpc_password.expose_secret().is_empty() {
        return None;
    }

    Some(RpcCredentials::new(
        fallback.rpc_user.clone(),
        fallback.rpc_password.clone(),
        CredentialSource::Fallback,
    ))
}
