//! Path helpers for the Bitcoin Core data directory.
//!
//! Responsibilities:
//! - Map the host operating system to the directory holding `bitcoin.conf`.
//! - Use `directories` crate for the user's home directory.
//!
//! Does NOT handle:
//! - File I/O operations (see conf.rs).
//! - Datadir overrides such as `-datadir` or `-conf`; callers pass an explicit
//!   directory for those.
//!
//! Invariants:
//! - Unsupported platforms have no default; callers must pass a directory.

use std::path::{Path, PathBuf};

use crate::constants::{LINUX_DATA_DIR, MACOS_DATA_DIR};

/// Operating system families with a known Bitcoin Core data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsKind {
    Linux,
    MacOs,
    /// Any platform without a default data directory.
    Other,
}

impl OsKind {
    /// The operating system this binary was built for.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Classify a value of `std::env::consts::OS`.
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "linux" => Self::Linux,
            "macos" => Self::MacOs,
            _ => Self::Other,
        }
    }
}

/// Returns the default config directory for `os` rooted at `home`.
///
/// - Linux: `~/.bitcoin`
/// - macOS: `~/Library/Application Support/Bitcoin`
/// - anything else: `None`
pub fn default_config_dir_for(os: OsKind, home: &Path) -> Option<PathBuf> {
    match os {
        OsKind::Linux => Some(home.join(LINUX_DATA_DIR)),
        OsKind::MacOs => Some(MACOS_DATA_DIR.iter().fold(home.to_path_buf(), |p, s| p.join(s))),
        OsKind::Other => None,
    }
}

/// Returns the default config directory for the host platform.
///
/// `None` when the platform is unsupported or no home directory can be found.
pub fn default_config_dir() -> Option<PathBuf> {
    let os = OsKind::current();
    if os == OsKind::Other {
        return None;
    }

    let base_dirs = directories::BaseDirs::new()?;
    default_config_dir_for(os, base_dirs.home_dir())
}
