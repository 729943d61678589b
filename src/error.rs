//! Errors raised while building the lint engine or loading its inputs.
//!
//! Linting itself never fails: classification is total and every rule is a
//! total function over the tree. Only user-supplied configuration and file
//! access can go wrong.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {tier} pattern {pattern:?}: {source}")]
    Glob {
        tier: &'static str,
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("invalid word list: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
