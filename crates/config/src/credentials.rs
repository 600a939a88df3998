//! Credential types for Bitcoin RPC resolution.
//!
//! Responsibilities:
//! - Hold a resolved RPC username/password pair and the tier it came from.
//! - Model the caller-supplied fallback mapping (`rpc_user`, `rpc_password`).
//!
//! Does NOT handle:
//! - Deciding which tier wins (see resolver/builder.rs).
//! - Checking credentials against a node.
//!
//! Invariants:
//! - Passwords use `secrecy::SecretString` so `Debug` output never shows them.

use std::collections::HashMap;
use std::fmt;

use secrecy::SecretString;
use serde::Deserialize;

use crate::constants::{FALLBACK_RPC_PASSWORD_KEY, FALLBACK_RPC_USER_KEY};

/// Module for deserializing SecretString from plain strings.
mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }

    pub fn empty() -> SecretString {
        SecretString::new(String::new().into())
    }
}

/// The tier that produced a credential pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// `BITCOIN_RPC_USER` / `BITCOIN_RPC_PASSWORD`.
    Environment,
    /// `rpcuser` / `rpcpassword` in `bitcoin.conf`.
    ConfigFile,
    /// Caller-supplied `rpc_user` / `rpc_password`.
    Fallback,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Environment => "environment",
            Self::ConfigFile => "config file",
            Self::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// A resolved RPC username and password.
#[derive(Debug, Clone)]
pub struct RpcCredentials {
    username: String,
    password: SecretString,
    source: CredentialSource,
}

impl RpcCredentials {
    pub fn new(username: String, password: SecretString, source: CredentialSource) -> Self {
        Self {
            username,
            password,
            source,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// The tier these credentials were resolved from.
    pub fn source(&self) -> CredentialSource {
        self.source
    }

    /// Split into the `(username, password)` pair.
    pub fn into_pair(self) -> (String, SecretString) {
        (self.username, self.password)
    }
}

/// Caller-supplied credentials consulted after the environment and `bitcoin.conf`.
///
/// Missing fields deserialize to empty strings, so this can be embedded in an
/// application's own config file.
#[derive(Debug, Clone, Deserialize)]
pub struct FallbackCredentials {
    #[serde(default)]
    pub rpc_user: String,
    #[serde(default = "secret_string::empty", deserialize_with = "secret_string::deserialize")]
    pub rpc_password: SecretString,
}

impl FallbackCredentials {
    pub fn new(rpc_user: impl Into<String>, rpc_password: impl Into<String>) -> Self {
        let rpc_password: String = rpc_password.into();
        Self {
            rpc_user: rpc_user.into(),
            rpc_password: SecretString::new(rpc_password.into_boxed_str()),
        }
    }
}

impl Default for FallbackCredentials {
    fn default() -> Self {
        Self {
            rpc_user: String::new(),
            rpc_password: secret_string::empty(),
        }
    }
}

impl From<&HashMap<String, String>> for FallbackCredentials {
    /// Reads `rpc_user` and `rpc_password`; other keys are ignored.
    fn from(map: &HashMap<String, String>) -> Self {
        let get = |key: &str| map.get(key).cloned().unwrap_or_default();
        Self::new(get(FALLBACK_RPC_USER_KEY), get(FALLBACK_RPC_PASSWORD_KEY))
    }
}

impl From<HashMap<String, String>> for FallbackCredentials {
    fn from(map: HashMap<String, String>) -> Self {
        Self::from(&map)
    }
}
