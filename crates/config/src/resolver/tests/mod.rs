//! Tests for the credential resolver.
//!
//! Responsibilities:
//! - Test tier precedence and short-circuiting.
//! - Test dotenv loading behavior.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Every test passes an explicit config directory so the real `~/.bitcoin` is never read.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::constants::CONFIG_FILE_NAME;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `contents` to `<dir>/bitcoin.conf`.
pub fn write_bitcoin_conf(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join(CONFIG_FILE_NAME);
    fs::write(&path, contents).expect("Failed to write bitcoin.conf");
    path
}
