//! Fragment resolution: turns a tag's value into markup fragments.
//!
//! Reference tokens resolve in this order:
//!
//! ```text
//! token ──► library table hit?  ──► mapped CDN url
//!       ──► http:// or https://? ──► token as-is
//!       ──► local file           ──► "<dir>/<token>"              (relative urls)
//!                                    "<site_url>/<dir>/<token>"   (absolute urls)
//! ```
//!
//! Nothing here touches the filesystem. A local token is assumed to exist;
//! copying it into the output tree is the job of [`crate::assets`].

use crate::{
    libs::LibraryTable,
    meta::MetaValue,
    tags::{Category, TagKind},
};
use std::borrow::Cow;

/// Local subdirectories for referenced files, relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDirs {
    pub css: String,
    pub js: String,
}

impl Default for AssetDirs {
    fn default() -> Self {
        Self {
            css: "css".into(),
            js: "js".into(),
        }
    }
}

impl AssetDirs {
    /// Subdirectory holding local files for `kind`, if it references files at all.
    pub fn for_kind(&self, kind: TagKind) -> Option<&str> {
        match kind {
            TagKind::Stylesheet => Some(self.css.as_str()),
            TagKind::Lib => Some(self.js.as_str()),
            TagKind::GoogleFont | TagKind::Style | TagKind::Script => None,
        }
    }
}

/// Everything URL construction depends on. Read-only for the whole run.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext<'a> {
    /// Site base URL, prefixed verbatim in absolute mode.
    pub site_url: &'a str,
    /// Emit `"<dir>/<file>"` instead of `"<site_url>/<dir>/<file>"`.
    pub relative_urls: bool,
    pub libs: &'a LibraryTable,
    pub dirs: &'a AssetDirs,
}

/// Resolve one tag value into its fragments, preserving item and token order.
pub fn resolve(kind: TagKind, value: MetaValue<'_>, ctx: &ResolutionContext<'_>) -> Vec<String> {
    let items = value.into_items();

    match kind.category() {
        Category::VerbatimBlock => items.into_iter().map(str::to_owned).collect(),
        Category::FontList => items
            .into_iter()
            .filter_map(|family| kind.render(family))
            .collect(),
        Category::ReferenceList => items
            .into_iter()
            .flat_map(split_references)
            .filter_map(|token| kind.render(&resolve_url(kind, &token, ctx)))
            .collect(),
    }
}

/// Split a reference line into tokens: whitespace removed, then split on commas.
///
/// Every token is kept, empty ones included: `"a.css,"` yields `["a.css", ""]`
/// and an empty token still resolves to the bare directory.
pub fn split_references(line: &str) -> Vec<String> {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    compact.split(',').map(str::to_owned).collect()
}

/// Resolve a single reference token of `kind` to a URL.
pub fn resolve_url<'a>(kind: TagKind, token: &'a str, ctx: &ResolutionContext<'a>) -> Cow<'a, str> {
    if let Some(url) = ctx.libs.get(token) {
        return Cow::Borrowed(url);
    }
    if is_absolute_url(token) {
        return Cow::Borrowed(token);
    }

    let dir = ctx.dirs.for_kind(kind).unwrap_or_default();
    if ctx.relative_urls {
        Cow::Owned(format!("{dir}/{token}"))
    } else {
        Cow::Owned(format!("{}/{dir}/{token}", ctx.site_url))
    }
}

fn is_absolute_url(token: &str) -> bool {
    token.starts_with("http://") || token.starts_with("https://")
}
