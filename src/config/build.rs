//! `[build]` section configuration.
//!
//! Where page-local asset files live and where they are copied to.

use super::defaults;
use crate::resolve::AssetDirs;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in page-assets.toml.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"   # Holds css/ and js/
/// output = "output"     # Receives css/ and js/
/// css_dir = "css"
/// js_dir = "js"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Content source directory.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Subdirectory for stylesheets, in both the content and output trees.
    #[serde(default = "defaults::build::css_dir")]
    #[educe(Default = defaults::build::css_dir())]
    pub css_dir: String,

    /// Subdirectory for scripts, in both the content and output trees.
    #[serde(default = "defaults::build::js_dir")]
    #[educe(Default = defaults::build::js_dir())]
    pub js_dir: String,
}

impl BuildConfig {
    pub fn asset_dirs(&self) -> AssetDirs {
        AssetDirs {
            css: self.css_dir.clone(),
            js: self.js_dir.clone(),
        }
    }
}
