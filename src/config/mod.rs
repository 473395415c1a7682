//! Configuration management for `page-assets.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                              |
//! |------------|------------------------------------------------------|
//! | `[site]`   | Base URL and relative-URL mode for generated links   |
//! | `[libs]`   | Extra library shortcuts, merged over the built-ins   |
//! | `[build]`  | Content/output roots and the `css`/`js` subdirs      |
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.com"
//! relative_urls = false
//!
//! [libs]
//! d3 = "https://d3js.org/d3.v4.min.js"
//!
//! [build]
//! content = "content"
//! output = "output"
//! ```

mod build;
pub mod defaults;
mod error;
mod site;

pub use build::BuildConfig;
pub use error::ConfigError;
pub use site::SiteSection;

use crate::{
    cli::{Cli, Commands},
    libs::LibraryTable,
    resolve::AssetDirs,
};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing page-assets.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// URL settings
    #[serde(default)]
    pub site: SiteSection,

    /// Library shortcuts added to (or replacing) the built-in ones
    #[serde(default)]
    pub libs: HashMap<String, String>,

    /// Asset directories
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;
        let mut config = Self::parse(&content, &path.display().to_string())?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        let config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            origin: origin.to_owned(),
            source,
        })?;
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Built-in library table merged with `[libs]`.
    pub fn library_table(&self) -> LibraryTable {
        LibraryTable::with_overrides(&self.libs)
    }

    pub fn asset_dirs(&self) -> AssetDirs {
        self.build.asset_dirs()
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        match &cli.command {
            Commands::Inject { site, .. } => {
                Self::update_option(&mut self.site.url, site.site_url.as_ref());
                Self::update_option(&mut self.site.relative_urls, site.relative_urls.as_ref());
            }
            Commands::Copy {
                content, output, ..
            } => {
                Self::update_option(&mut self.build.content, content.as_ref());
                Self::update_option(&mut self.build.output, output.as_ref());
            }
        }

        self.update_path_with_root(&root);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve content/output against the root directory
    fn update_path_with_root(&mut self, root: &Path) {
        let root = Self::normalize_path(&Self::expand_tilde(root));
        self.set_root(&root);
        self.build.content = Self::normalize_path(&root.join(Self::expand_tilde(&self.build.content)));
        self.build.output = Self::normalize_path(&root.join(Self::expand_tilde(&self.build.output)));
    }

    /// Expand a leading `~` to the home directory
    fn expand_tilde(path: &Path) -> PathBuf {
        match path.to_str() {
            Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
            None => path.to_path_buf(),
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before any document is processed
    pub fn validate(&self) -> Result<()> {
        let url = &self.site.url;
        if !url.is_empty()
            && !(url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/'))
        {
            bail!(ConfigError::Invalid(
                "[site.url] must be empty or start with http://, https:// or /".into()
            ));
        }

        Self::check_dir_name("[build.css_dir]", &self.build.css_dir)?;
        Self::check_dir_name("[build.js_dir]", &self.build.js_dir)?;

        if let Some((name, _)) = self.libs.iter().find(|(_, url)| url.trim().is_empty()) {
            bail!(ConfigError::Invalid(format!(
                "[libs.{name}] must not be empty"
            )));
        }

        Ok(())
    }

    /// Asset dirs are single path segments: they appear verbatim in URLs
    fn check_dir_name(field: &str, name: &str) -> Result<()> {
        if name.is_empty() {
            bail!(ConfigError::Invalid(format!("{field} must not be empty")));
        }
        if name == "." || name == ".." || name.contains(['/', '\\']) {
            bail!(ConfigError::Invalid(format!(
                "{field} must be a single directory name, got `{name}`"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_from_str() {
        let config = SiteConfig::from_str(
            r#"
            [site]
            url = "https://example.com"

            [libs]
            d3 = "https://d3js.org/d3.v4.min.js"
        "#,
        )
        .unwrap();

        assert_eq!(config.site.url, "https://example.com");
        assert_eq!(
            config.libs.get("d3").map(String::as_str),
            Some("https://d3js.org/d3.v4.min.js")
        );
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let err = SiteConfig::from_str("[site\nurl = 1").unwrap_err();
        assert!(err.to_string().contains("<inline>"));
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let result = SiteConfig::from_str("[EXTERNAL_PAGE_LIBS]\nd3 = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path_sets_config_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page-assets.toml");
        fs::write(&path, "[site]\nrelative_urls = true\n").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.config_path, path);
        assert!(config.site.relative_urls);
    }

    #[test]
    fn test_from_path_parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page-assets.toml");
        fs::write(&path, "[site\nurl = 1").unwrap();

        let err = SiteConfig::from_path(&path).unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().unwrap();
        assert!(matches!(config_err, ConfigError::Parse { origin, .. } if origin.ends_with("page-assets.toml")));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_from_path_missing() {
        let dir = TempDir::new().unwrap();
        let err = SiteConfig::from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_library_table_merges_builtins() {
        let config = SiteConfig::from_str(
            r#"
            [libs]
            d3 = "https://d3js.org/d3.v4.min.js"
            vue = "https://unpkg.com/vue@3"
        "#,
        )
        .unwrap();
        let libs = config.library_table();

        assert_eq!(libs.get("d3"), Some("https://d3js.org/d3.v4.min.js"));
        assert_eq!(libs.get("vue"), Some("https://unpkg.com/vue@3"));
        assert!(libs.get("jquery").is_some());
    }

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();

        assert_eq!(config.get_root(), Path::new("./"));
        assert_eq!(config.site.url, "");
        assert!(!config.site.relative_urls);
        assert!(config.libs.is_empty());
        assert_eq!(config.asset_dirs(), AssetDirs::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_site_url() {
        let mut config = SiteConfig::default();
        for url in ["https://example.com", "http://localhost:8000", "/blog", ""] {
            config.site.url = url.into();
            assert!(config.validate().is_ok(), "{url}");
        }
        config.site.url = "example.com".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_dir_names() {
        let mut config = SiteConfig::default();
        config.build.css_dir = String::new();
        assert!(config.validate().is_err());

        config.build.css_dir = "static/css".into();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[build.css_dir]"));

        config.build.css_dir = "css".into();
        config.build.js_dir = "..".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_lib_url() {
        let mut config = SiteConfig::default();
        config.libs.insert("broken".into(), " ".into());
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[libs.broken]"));
    }

    #[test]
    fn test_update_with_cli_inject_overrides() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = Cli::parse_from([
            "page-assets",
            "--root",
            root,
            "inject",
            "--site-url",
            "https://cli.example",
            "--relative-urls",
            "post.json",
        ]);
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli);

        assert_eq!(config.site.url, "https://cli.example");
        assert!(config.site.relative_urls);
        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.get_root(), root);
        assert_eq!(config.build.content, root.join("content"));
        assert_eq!(config.build.output, root.join("output"));
    }

    #[test]
    fn test_update_with_cli_copy_overrides() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = Cli::parse_from([
            "page-assets",
            "--root",
            root,
            "copy",
            "--content",
            "src",
            "--output",
            "public",
        ]);
        let mut config = SiteConfig::from_str("[site]\nurl = \"https://kept.example\"").unwrap();
        config.update_with_cli(&cli);

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.build.content, root.join("src"));
        assert_eq!(config.build.output, root.join("public"));
        assert_eq!(config.site.url, "https://kept.example");
    }
}
