//! `[site]` section configuration.
//!
//! How generated asset URLs are anchored.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in page-assets.toml.
///
/// # Example
/// ```toml
/// [site]
/// url = "https://myblog.com"
/// relative_urls = false
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Base URL prefixed to local asset links when `relative_urls` is off.
    /// Used exactly as written; empty yields root-relative links (`/css/a.css`).
    #[serde(default = "defaults::site::url")]
    #[educe(Default = defaults::site::url())]
    pub url: String,

    /// Emit `css/a.css` instead of `<url>/css/a.css`.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub relative_urls: bool,
}
