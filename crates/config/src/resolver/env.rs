//! Environment variable tier.
//!
//! Responsibilities:
//! - Read `BITCOIN_RPC_USER` and `BITCOIN_RPC_PASSWORD`.
//!
//! Does NOT handle:
//! - .env file loading (handled by CredentialResolver::load_dotenv).
//!
//! Invariants:
//! - Unset or empty variables are treated as absent.
//! - When both are set, a non-UTF-8 value is an error rather than a fall-through.
//! - Values are returned exactly as set; whitespace is not trimmed.

use std::ffi::OsString;

use secrecy::SecretString;

use super::error::ConfigError;
use crate::constants::{ENV_RPC_PASSWORD, ENV_RPC_USER};
use crate::credentials::{CredentialSource, RpcCredentials};

/// Read an environment variable, returning None if unset, empty, or not valid UTF-8.
pub fn env_var_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_var_os_non_empty(key: &str) -> Option<OsString> {
    std::env::var_os(key).filter(|s| !s.is_empty())
}

fn into_unicode(key: &str, value: OsString) -> Result<String, ConfigError> {
    value.into_string().map_err(|_| ConfigError::NonUnicodeEnvVar {
        var: key.to_string(),
    })
}

/// Credentials from the environment, if both variables are set and non-empty.
///
/// # Errors
///
/// `ConfigError::NonUnicodeEnvVar` if both are set but either is not valid UTF-8.
pub(crate) fn credentials_from_env() -> Result<Option<RpcCredentials>, ConfigError> {
    let (Some(username), Some(password)) = (
        env_var_os_non_empty(ENV_RPC_USER),
        env_var_os_non_empty(ENV_RPC_PASSWORD),
    ) else {
        return Ok(None);
    };

    let username = into_unicode(ENV_RPC_USER, username)?;
    let password = into_unicode(ENV_RPC_PASSWORD, password)?;

    Ok(Some(RpcCredentials::new(
        username,
        SecretString::new(password.into()),
        CredentialSource::Environment,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_non_empty_filters_empty_strings() {
        let key = "_BITCOIN_RPC_TEST_VAR";

        temp_env::with_var_unset(key, || {
            assert!(env_var_non_empty(key).is_none(), "Unset env var should return None");
        });

        temp_env::with_vars([(key, Some(""))], || {
            assert!(env_var_non_empty(key).is_none(), "Empty env var should return None");
        });

        // Whitespace is a real value here
        temp_env::with_vars([(key, Some("  "))], || {
            assert_eq!(env_var_non_empty(key), Some("  ".to_string()));
        });

        temp_env::with_vars([(key, Some(" value "))], || {
            assert_eq!(env_var_non_empty(key), Some(" value ".to_string()));
        });
    }

    #[test]
    #[serial]
    fn test_credentials_from_env_requires_both() {
        let _lock = crate::test_util::global_test_lock().lock().unwrap();

        temp_env::with_vars(
            [(ENV_RPC_USER, Some("bob")), (ENV_RPC_PASSWORD, None::<&str>)],
            || {
                assert!(credentials_from_env().unwrap().is_none());
            },
        );

        temp_env::with_vars(
            [(ENV_RPC_USER, Some("")), (ENV_RPC_PASSWORD, Some("pw1"))],
            || {
                assert!(credentials_from_env().unwrap().is_none());
            },
        );

        temp_env::with_vars(
            [(ENV_RPC_USER, Some("bob")), (ENV_RPC_PASSWORD, Some("pw1"))],
            || {
                let creds = credentials_from_env().unwrap().unwrap();
                assert_eq!(creds.username(), "bob");
                assert_eq!(creds.password().expose_secret(), "pw1");
                assert_eq!(creds.source(), CredentialSource::Environment);
            },
        );
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_credentials_from_env_rejects_non_unicode_value() {
        use std::os::unix::ffi::OsStringExt;

        let _lock = crate::test_util::global_test_lock().lock().unwrap();
        let invalid = OsString::from_vec(vec![b'p', 0xff, b'w']);

        temp_env::with_vars(
            [
                (ENV_RPC_USER, Some(OsString::from("bob"))),
                (ENV_RPC_PASSWORD, Some(invalid.clone())),
            ],
            || {
                let err = credentials_from_env().unwrap_err();
                assert!(matches!(
                    err,
                    ConfigError::NonUnicodeEnvVar { ref var } if var == ENV_RPC_PASSWORD
                ));
            },
        );

        // Only one variable set: nothing to resolve, so no error either
        temp_env::with_vars(
            [
                (ENV_RPC_USER, Some(invalid)),
                (ENV_RPC_PASSWORD, None::<OsString>),
            ],
            || {
                assert!(credentials_from_env().unwrap().is_none());
            },
        );
    }
}
