//! Tag vocabulary: canonical kinds and the alias table that maps metadata keys onto them.
//!
//! # Kinds
//!
//! | Kind          | Category        | Bucket   | Aliases                 |
//! |---------------|-----------------|----------|-------------------------|
//! | `stylesheet`  | reference list  | header   | `stylesheet`            |
//! | `lib`         | reference list  | footer   | `lib`                   |
//! | `google-font` | font list       | header   | `google-font`, `font`   |
//! | `style`       | verbatim block  | header   | `style`, `css`          |
//! | `script`      | verbatim block  | footer   | `script`, `javascript`  |
//!
//! Lookups are case-insensitive and tolerate one trailing character
//! (`scripts`, `libs`, `fonts`). The strip is blind: it does not check that
//! the dropped character was an `s`, so `csss` normalizes to `style` too.

use rustc_hash::FxHashMap;
use std::fmt;

// ============================================================================
// Canonical Kinds
// ============================================================================

/// Canonical tag kind every recognized metadata key reduces to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// Stylesheet references (`<link rel="stylesheet">`).
    Stylesheet,
    /// Script library references (`<script src>`).
    Lib,
    /// Google font families.
    GoogleFont,
    /// Raw CSS blocks, emitted as-is.
    Style,
    /// Raw JS blocks, emitted as-is.
    Script,
}

/// How the value of a tag is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Each item is an already-formed HTML fragment.
    VerbatimBlock,
    /// Each item is a comma-separated list of library names, URLs or local files.
    ReferenceList,
    /// Each item is a font family name.
    FontList,
}

/// Injection point a fragment is accumulated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Header,
    Footer,
}

impl TagKind {
    pub const ALL: [TagKind; 5] = [
        TagKind::Stylesheet,
        TagKind::Lib,
        TagKind::GoogleFont,
        TagKind::Style,
        TagKind::Script,
    ];

    /// Canonical spelling, also its primary alias.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stylesheet => "stylesheet",
            Self::Lib => "lib",
            Self::GoogleFont => "google-font",
            Self::Style => "style",
            Self::Script => "script",
        }
    }

    pub const fn category(self) -> Category {
        match self {
            Self::Style | Self::Script => Category::VerbatimBlock,
            Self::Stylesheet | Self::Lib => Category::ReferenceList,
            Self::GoogleFont => Category::FontList,
        }
    }

    pub const fn bucket(self) -> Bucket {
        match self {
            Self::Stylesheet | Self::GoogleFont | Self::Style => Bucket::Header,
            Self::Lib | Self::Script => Bucket::Footer,
        }
    }

    /// Render the markup fragment for a resolved value.
    ///
    /// `value` is a URL for reference kinds and a family name for fonts.
    /// Verbatim kinds have no template and return `None`.
    pub fn render(self, value: &str) -> Option<String> {
        match self {
            Self::Stylesheet => Some(format!(
                r#"<link rel="stylesheet" href="{value}" type="text/css" />"#
            )),
            Self::Lib => Some(format!(r#"<script src="{value}"></script>"#)),
            // No space before `href`: pages built with earlier releases rely on this exact markup.
            Self::GoogleFont => Some(format!(
                r#"<link rel="stylesheet"href="http://fonts.googleapis.com/css?family={value}" />"#
            )),
            Self::Style | Self::Script => None,
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Alias Table
// ============================================================================

/// Built-in key spellings.
const BUILTIN_ALIASES: &[(&str, TagKind)] = &[
    ("stylesheet", TagKind::Stylesheet),
    ("lib", TagKind::Lib),
    ("google-font", TagKind::GoogleFont),
    ("font", TagKind::GoogleFont),
    ("style", TagKind::Style),
    ("css", TagKind::Style),
    ("script", TagKind::Script),
    ("javascript", TagKind::Script),
];

/// Maps lower-case key spellings to canonical kinds.
#[derive(Debug, Clone)]
pub struct AliasTable {
    aliases: FxHashMap<String, TagKind>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self {
            aliases: BUILTIN_ALIASES
                .iter()
                .map(|(alias, kind)| ((*alias).to_owned(), *kind))
                .collect(),
        }
    }
}

impl AliasTable {
    /// Table with no aliases at all.
    pub fn empty() -> Self {
        Self {
            aliases: FxHashMap::default(),
        }
    }

    /// Register an extra spelling. Stored lower-cased.
    pub fn insert(&mut self, alias: &str, kind: TagKind) {
        self.aliases.insert(alias.to_lowercase(), kind);
    }

    /// Exact lookup of an already lower-cased spelling.
    pub fn get(&self, alias: &str) -> Option<TagKind> {
        self.aliases.get(alias).copied()
    }

    /// Map a metadata key to its canonical kind.
    ///
    /// Lower-cases the key, tries it directly, then retries once with the
    /// last character removed. Keys that miss both lookups are not ours and
    /// yield `None`.
    pub fn normalize(&self, key: &str) -> Option<TagKind> {
        let key = key.to_lowercase();
        self.get(&key).or_else(|| self.get(strip_last_char(&key)))
    }
}

/// Drop exactly one trailing character, respecting UTF-8 boundaries.
fn strip_last_char(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next_back();
    chars.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_direct_aliases() {
        let table = AliasTable::default();
        for (alias, kind) in BUILTIN_ALIASES {
            assert_eq!(table.normalize(alias), Some(*kind), "alias {alias}");
        }
    }

    #[test]
    fn test_normalize_case_insensitive() {
        let table = AliasTable::default();
        assert_eq!(table.normalize("StyleSheet"), Some(TagKind::Stylesheet));
        assert_eq!(table.normalize("JAVASCRIPT"), Some(TagKind::Script));
        for (alias, _) in BUILTIN_ALIASES {
            let upper = alias.to_uppercase();
            assert_eq!(table.normalize(&upper), table.normalize(alias));
        }
    }

    #[test]
    fn test_normalize_plural_forms() {
        let table = AliasTable::default();
        assert_eq!(table.normalize("scripts"), Some(TagKind::Script));
        assert_eq!(table.normalize("Libs"), Some(TagKind::Lib));
        assert_eq!(table.normalize("stylesheets"), Some(TagKind::Stylesheet));
        assert_eq!(table.normalize("fonts"), Some(TagKind::GoogleFont));
        assert_eq!(table.normalize("google-fonts"), Some(TagKind::GoogleFont));
    }

    #[test]
    fn test_normalize_strips_any_trailing_char() {
        let table = AliasTable::default();
        assert_eq!(table.normalize("csss"), Some(TagKind::Style));
        assert_eq!(table.normalize("lib!"), Some(TagKind::Lib));
    }

    #[test]
    fn test_normalize_strips_only_once() {
        let table = AliasTable::default();
        assert_eq!(table.normalize("scriptss"), None);
        assert_eq!(table.normalize("libxx"), None);
    }

    #[test]
    fn test_normalize_unknown_keys() {
        let table = AliasTable::default();
        assert_eq!(table.normalize("title"), None);
        assert_eq!(table.normalize("unknown-key"), None);
        assert_eq!(table.normalize("header_assets"), None);
    }

    #[test]
    fn test_normalize_short_keys() {
        let table = AliasTable::default();
        assert_eq!(table.normalize(""), None);
        assert_eq!(table.normalize("s"), None);
        assert_eq!(table.normalize("é"), None);
    }

    #[test]
    fn test_every_kind_reachable() {
        let table = AliasTable::default();
        for kind in TagKind::ALL {
            assert_eq!(table.normalize(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_insert_custom_alias() {
        let mut table = AliasTable::empty();
        assert_eq!(table.normalize("js"), None);
        table.insert("JS", TagKind::Lib);
        assert_eq!(table.normalize("js"), Some(TagKind::Lib));
        assert_eq!(table.normalize("Jss"), Some(TagKind::Lib));
    }

    #[test]
    fn test_buckets() {
        assert_eq!(TagKind::Stylesheet.bucket(), Bucket::Header);
        assert_eq!(TagKind::GoogleFont.bucket(), Bucket::Header);
        assert_eq!(TagKind::Style.bucket(), Bucket::Header);
        assert_eq!(TagKind::Lib.bucket(), Bucket::Footer);
        assert_eq!(TagKind::Script.bucket(), Bucket::Footer);
    }

    #[test]
    fn test_render_templates() {
        assert_eq!(
            TagKind::Stylesheet.render("css/a.css").as_deref(),
            Some(r#"<link rel="stylesheet" href="css/a.css" type="text/css" />"#)
        );
        assert_eq!(
            TagKind::Lib.render("js/a.js").as_deref(),
            Some(r#"<script src="js/a.js"></script>"#)
        );
        assert_eq!(
            TagKind::GoogleFont.render("Roboto").as_deref(),
            Some(r#"<link rel="stylesheet"href="http://fonts.googleapis.com/css?family=Roboto" />"#)
        );
        assert_eq!(TagKind::Style.render("x"), None);
        assert_eq!(TagKind::Script.render("x"), None);
    }
}
