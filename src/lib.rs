//! page-assets - per-page stylesheets, scripts, libraries and fonts for static sites.
//!
//! Pages declare what they need in their metadata:
//!
//! ```toml
//! stylesheet = "theme.css, https://cdn.example/extra.css"
//! libs = "jquery, local.js"
//! google-font = "Roboto"
//! script = "<script>init()</script>"
//! ```
//!
//! [`plugin::PageAssets`] turns these into two ordered lists of HTML fragments,
//! `header_assets` and `footer_assets`, for the page template to emit, and
//! copies the referenced local files into the output tree.

pub mod assets;
pub mod cli;
pub mod config;
pub mod inject;
pub mod libs;
pub mod logger;
pub mod meta;
pub mod plugin;
pub mod resolve;
pub mod tags;

pub use inject::Fragments;
pub use meta::{FOOTER_ASSETS_KEY, HEADER_ASSETS_KEY, MetaValue, Metadata};
pub use plugin::{PageAssets, SiteHooks};
pub use tags::{AliasTable, Bucket, Category, TagKind};
