//! Download operations: repository files and release assets.

pub mod error;
pub mod file;
pub mod release;

pub use error::FetchError;
pub use file::fetch_file;
pub use release::{fetch_latest_asset, select_asset};
