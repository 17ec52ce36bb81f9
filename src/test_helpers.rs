//! Shared test utilities for the sharekit test suite.
//!
//! ```text
//! use crate::test_helpers::*;
//!
//! let site = site_with_config(r#"user_twitter = "@someone""#);
//! let config = load_config(site.path()).unwrap();
//! ```

use tempfile::TempDir;

/// The share endpoint derived from the stock `user_twitter`.
pub const STOCK_ENDPOINT: &str = "https://twitter.com/compose/tweet?text=@rgp4ss";

/// Create a temp site directory containing `config.toml` with `content`.
pub fn site_with_config(content: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("config.toml"), content).unwrap();
    tmp
}

/// Create a temp site directory with no `config.toml`.
pub fn empty_site() -> TempDir {
    TempDir::new().unwrap()
}
