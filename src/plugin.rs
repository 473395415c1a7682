//! Host-facing entry points.
//!
//! A site generator drives this crate through two lifecycle hooks:
//!
//! | Hook                   | When                               | Effect                                   |
//! |------------------------|------------------------------------|------------------------------------------|
//! | `on_document_metadata` | before each document is rendered   | adds `header_assets` / `footer_assets`   |
//! | `on_build_finalized`   | once, after all output is written  | copies `css/` and `js/` into the output  |
//!
//! Wiring these into the host's event system is the host adapter's job.

use crate::{
    assets::{CopyReport, copy_assets},
    config::SiteConfig,
    inject::{Fragments, inject_assets},
    libs::LibraryTable,
    log,
    meta::Metadata,
    resolve::{AssetDirs, ResolutionContext},
    tags::AliasTable,
};
use anyhow::{Context, Result};
use std::path::Path;

/// Lifecycle hooks a host build pipeline calls.
pub trait SiteHooks {
    /// Resolve the asset tags of one document and write its buckets back.
    fn on_document_metadata(&self, metadata: &mut Metadata) -> Result<Fragments>;

    /// Relocate page-local asset files once the build has produced its output.
    fn on_build_finalized(&self, content: &Path, output: &Path) -> Result<CopyReport>;
}

/// Read-only state shared by every document of a run.
#[derive(Debug, Clone)]
pub struct PageAssets {
    aliases: AliasTable,
    libs: LibraryTable,
    site_url: String,
    relative_urls: bool,
    dirs: AssetDirs,
    clean: bool,
}

impl PageAssets {
    /// Built-in aliases and libraries, default `css`/`js` directories.
    pub fn new(site_url: impl Into<String>, relative_urls: bool) -> Self {
        Self {
            aliases: AliasTable::default(),
            libs: LibraryTable::default(),
            site_url: site_url.into(),
            relative_urls,
            dirs: AssetDirs::default(),
            clean: false,
        }
    }

    /// Build from a loaded config; `[libs]` is merged over the built-ins here.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            libs: config.library_table(),
            dirs: config.asset_dirs(),
            ..Self::new(config.site.url.clone(), config.site.relative_urls)
        }
    }

    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_libs(mut self, libs: LibraryTable) -> Self {
        self.libs = libs;
        self
    }

    pub fn with_dirs(mut self, dirs: AssetDirs) -> Self {
        self.dirs = dirs;
        self
    }

    /// Copy every asset on finalize, ignoring modification times.
    pub fn with_clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    pub fn context(&self) -> ResolutionContext<'_> {
        ResolutionContext {
            site_url: &self.site_url,
            relative_urls: self.relative_urls,
            libs: &self.libs,
            dirs: &self.dirs,
        }
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }
}

impl SiteHooks for PageAssets {
    fn on_document_metadata(&self, metadata: &mut Metadata) -> Result<Fragments> {
        let fragments = inject_assets(metadata, &self.aliases, &self.context())?;
        Ok(fragments)
    }

    fn on_build_finalized(&self, content: &Path, output: &Path) -> Result<CopyReport> {
        let report = copy_assets(content, output, &self.dirs, self.clean).with_context(|| {
            format!(
                "Failed to copy assets from `{}` to `{}`",
                content.display(),
                output.display()
            )
        })?;
        log!("assets"; "copied {}, up to date {}", report.copied, report.skipped);
        Ok(report)
    }
}
