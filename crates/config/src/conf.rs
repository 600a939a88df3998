//! `bitcoin.conf` loading.
//!
//! Responsibilities:
//! - Locate `bitcoin.conf` inside a config directory.
//! - Parse `key=value` lines into a flat string mapping.
//!
//! Does NOT handle:
//! - Credential resolution (see resolver/).
//! - Network sections (`[main]`, `[test]`), `includeconf`, or type coercion.
//!   Section headers have no `=` and are ignored like any other bare line.
//!
//! Invariants:
//! - Lines end at `\n`, `\r\n`, or a lone `\r`.
//! - Only lines whose first character is `#` are comments.
//! - Lines split at the first `=`; the key is kept verbatim, the value trimmed.
//! - Later duplicates overwrite earlier ones.
//! - A missing file is an empty config, any other I/O failure is returned.

use std::collections::HashMap;
use std::convert::Infallible;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use crate::constants::{COMMENT_PREFIX, CONFIG_FILE_NAME};

/// Parsed contents of a `bitcoin.conf` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitcoinConf {
    entries: HashMap<String, String>,
}

impl BitcoinConf {
    /// Parse `bitcoin.conf` text.
    pub fn parse(contents: &str) -> Self {
        let mut entries = HashMap::new();

        // A lone `\r` also ends a line; `\r\n` leaves an empty fragment with no `=`.
        for line in contents.split(['\n', '\r']) {
            if line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                entries.insert(key.to_string(), value.trim().to_string());
            }
        }

        Self { entries }
    }

    /// Look up the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.entries
    }
}

impl FromStr for BitcoinConf {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<BitcoinConf> for HashMap<String, String> {
    fn from(conf: BitcoinConf) -> Self {
        conf.entries
    }
}

/// Load `bitcoin.conf` from the directory `config_dir`.
///
/// A missing file yields an empty [`BitcoinConf`].
///
/// # Errors
///
/// Returns the underlying I/O error if the file exists but cannot be read
/// (for example permission denied, a directory in its place, or invalid UTF-8).
pub fn load_config(config_dir: &Path) -> std::io::Result<BitcoinConf> {
    let config_file = config_dir.join(CONFIG_FILE_NAME);

    let contents = match std::fs::read_to_string(&config_file) {
        Ok(contents) => contents,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            tracing::debug!(path = %config_file.display(), "bitcoin.conf not found");
            return Ok(BitcoinConf::default());
        }
        Err(e) => return Err(e),
    };

    let conf = BitcoinConf::parse(&contents);
    tracing::debug!(
        path = %config_file.display(),
        keys = conf.len(),
        "Loaded bitcoin.conf"
    );
    Ok(conf)
}
