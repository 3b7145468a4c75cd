//! Secure secret storage using the operating system keyring.
//!
//! Secrets are keyed by a service identifier (the target repository name) and
//! an account identifier (a fixed value per tool install):
//! - macOS: Keychain
//! - Linux: Secret Service (GNOME Keyring, `KWallet`)
//! - Windows: Credential Manager

use keyring::Entry;

use crate::error::{HubfetchError, Result};

/// Key-value secret storage keyed by (service, account).
///
/// The trait seam exists so the token acquirer can be tested without touching
/// the real keyring.
#[cfg_attr(test, mockall::automock)]
pub trait SecretStore {
    /// Look up a secret. Returns `None` when no entry exists or the stored
    /// secret is empty.
    fn get(&self, service: &str, account: &str) -> Result<Option<String>>;

    /// Store a secret, overwriting any previous value.
    fn set(&self, service: &str, account: &str, secret: &str) -> Result<()>;

    /// Delete a stored secret. No-op if nothing is stored.
    fn delete(&self, service: &str, account: &str) -> Result<()>;
}

/// [`SecretStore`] backed by the platform-native keyring.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyringStore;

impl KeyringStore {
    /// Creates a new keyring-backed store.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn entry(service: &str, account: &str) -> Result<Entry> {
        Entry::new(service, account).map_err(|e| HubfetchError::CredentialStorage(e.to_string()))
    }
}

impl SecretStore for KeyringStore {
    fn get(&self, service: &str, account: &str) -> Result<Option<String>> {
        match Self::entry(service, account)?.get_password() {
            Ok(secret) if secret.is_empty() => Ok(None),
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(HubfetchError::CredentialStorage(e.to_string())),
        }
    }

    fn set(&self, service: &str, account: &str, secret: &str) -> Result<()> {
        Self::entry(service, account)?
            .set_password(secret)
            .map_err(|e| HubfetchError::CredentialStorage(e.to_string()))
    }

    fn delete(&self, service: &str, account: &str) -> Result<()> {
        match Self::entry(service, account)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(HubfetchError::CredentialStorage(e.to_string())),
        }
    }
}
