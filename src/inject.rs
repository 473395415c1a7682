//! Per-document orchestration: normalize keys, resolve values, fill the buckets.
//!
//! # Flow
//!
//! ```text
//! metadata (in key order)
//!     │
//!     ├── normalize(key) ── None ──► untouched
//!     │        │
//!     │      Some(kind)
//!     │        ▼
//!     │   MetaValue::from_json ──► resolve() ──► Fragments[kind.bucket()]
//!     ▼
//! Fragments::write_into(metadata)
//!     ├── header_assets   (only if non-empty)
//!     └── footer_assets   (only if non-empty)
//! ```

use crate::{
    debug,
    meta::{FOOTER_ASSETS_KEY, HEADER_ASSETS_KEY, MetaError, MetaValue, Metadata},
    resolve::{ResolutionContext, resolve},
    tags::{AliasTable, Bucket},
};
use serde_json::Value;

/// Accumulated fragments of one document, one ordered list per bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pub header: Vec<String>,
    pub footer: Vec<String>,
}

impl Fragments {
    pub fn bucket(&self, bucket: Bucket) -> &[String] {
        match bucket {
            Bucket::Header => &self.header,
            Bucket::Footer => &self.footer,
        }
    }

    /// Append fragments after whatever the bucket already holds.
    pub fn extend(&mut self, bucket: Bucket, fragments: Vec<String>) {
        let target = match bucket {
            Bucket::Header => &mut self.header,
            Bucket::Footer => &mut self.footer,
        };
        target.extend(fragments);
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.footer.is_empty()
    }

    /// Write non-empty buckets into `metadata` under their well-known keys.
    pub fn write_into(&self, metadata: &mut Metadata) {
        for (key, fragments) in [
            (HEADER_ASSETS_KEY, &self.header),
            (FOOTER_ASSETS_KEY, &self.footer),
        ] {
            if !fragments.is_empty() {
                let list = fragments.iter().cloned().map(Value::String).collect();
                metadata.insert(key.to_owned(), Value::Array(list));
            }
        }
    }
}

/// Collect the fragments a document's metadata asks for, without modifying it.
pub fn collect_fragments(
    metadata: &Metadata,
    aliases: &AliasTable,
    ctx: &ResolutionContext<'_>,
) -> Result<Fragments, MetaError> {
    let mut fragments = Fragments::default();

    for (key, value) in metadata {
        let Some(kind) = aliases.normalize(key) else {
            continue;
        };
        let value = MetaValue::from_json(key, value)?;
        let resolved = resolve(kind, value, ctx);
        debug!("inject"; "{key} -> {kind}: {} fragment(s)", resolved.len());
        fragments.extend(kind.bucket(), resolved);
    }

    Ok(fragments)
}

/// Resolve every recognized tag of `metadata` and write the resulting buckets back.
///
/// Returns the fragments that were written. On error the metadata is left unchanged.
pub fn inject_assets(
    metadata: &mut Metadata,
    aliases: &AliasTable,
    ctx: &ResolutionContext<'_>,
) -> Result<Fragments, MetaError> {
    let fragments = collect_fragments(metadata, aliases, ctx)?;
    fragments.write_into(metadata);
    Ok(fragments)
}
