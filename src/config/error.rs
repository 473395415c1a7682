use std::{io, path::PathBuf};
use thiserror::Error;

/// Failures while loading or checking `page-assets.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read page-assets config `{}`", .0.display())]
    Read(PathBuf, #[source] io::Error),

    /// `origin` is the file path, or `<inline>` for configs parsed from a string.
    #[error("invalid TOML in page-assets config `{origin}`")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid page-assets config: {0}")]
    Invalid(String),
}
