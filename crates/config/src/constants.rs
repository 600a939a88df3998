//! Centralized constants for Bitcoin RPC credential resolution.
//!
//! File names, environment variable names, and the key names recognized in
//! each credential tier live here so the loader and resolver agree on them.

// =============================================================================
// Config File
// =============================================================================

/// File name appended to the config directory.
pub const CONFIG_FILE_NAME: &str = "bitcoin.conf";

/// Prefix marking a full-line comment in `bitcoin.conf`.
pub const COMMENT_PREFIX: char = '#';

/// Key holding the RPC username in `bitcoin.conf`.
pub const CONF_RPC_USER_KEY: &str = "rpcuser";

/// Key holding the RPC password in `bitcoin.conf`.
pub const CONF_RPC_PASSWORD_KEY: &str = "rpcpassword";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable carrying the RPC username.
pub const ENV_RPC_USER: &str = "BITCOIN_RPC_USER";

/// Environment variable carrying the RPC password.
pub const ENV_RPC_PASSWORD: &str = "BITCOIN_RPC_PASSWORD";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Fallback Mapping
// =============================================================================

/// Fallback mapping key for the RPC username.
pub const FALLBACK_RPC_USER_KEY: &str = "rpc_user";

/// Fallback mapping key for the RPC password.
pub const FALLBACK_RPC_PASSWORD_KEY: &str = "rpc_password";

// =============================================================================
// Default Directories
// =============================================================================

/// Data directory under `$HOME` on Linux.
pub const LINUX_DATA_DIR: &str = ".bitcoin";

/// Data directory under `$HOME` on macOS, one path segment per entry.
pub const MACOS_DATA_DIR: [&str; 3] = ["Library", "Application Support", "Bitcoin"];
