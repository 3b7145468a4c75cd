//! Authentication module for hubfetch.
//!
//! Provides three-tier access token acquisition (environment override, OS
//! keyring cache, interactive device flow) and keyring-backed secret storage.

pub mod acquirer;
pub mod device_flow;
pub mod store;
pub mod token;

pub use acquirer::{AcquirerConfig, TokenAcquirer};
pub use store::{KeyringStore, SecretStore};
pub use token::{Token, TokenProvenance};
