//! Known-library table: short names like `jquery` mapped to CDN URLs.

use rustc_hash::FxHashMap;

const GOOGLE_API: &str = "https://ajax.googleapis.com/ajax/libs/";
const CLOUDFLARE: &str = "https://cdnjs.cloudflare.com/ajax/libs/";

/// Built-in shortcuts: (name, cdn root, path under root).
const BUILTIN_LIBS: &[(&str, &str, &str)] = &[
    ("jquery", GOOGLE_API, "jquery/3.1.1/jquery.min.js"),
    ("jquery3", GOOGLE_API, "jquery/3.1.1/jquery.min.js"),
    ("jquery2", GOOGLE_API, "jquery/2.2.4/jquery.min.js"),
    ("three.js", GOOGLE_API, "threejs/r76/three.min.js"),
    ("threejs", GOOGLE_API, "threejs/r76/three.min.js"),
    ("vue", CLOUDFLARE, "vue/2.0.3/vue.js"),
];

/// Read-only mapping from library name to URL.
///
/// Built once per run; host entries are merged in before any document is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryTable {
    libs: FxHashMap<String, String>,
}

impl Default for LibraryTable {
    fn default() -> Self {
        Self {
            libs: BUILTIN_LIBS
                .iter()
                .map(|(name, root, path)| ((*name).to_owned(), format!("{root}{path}")))
                .collect(),
        }
    }
}

impl LibraryTable {
    /// Table without the built-in shortcuts.
    pub fn empty() -> Self {
        Self {
            libs: FxHashMap::default(),
        }
    }

    /// Built-ins overlaid with host entries. A host entry replaces a built-in
    /// of the same name; every other built-in stays.
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut table = Self::default();
        table.extend(overrides);
        table
    }

    pub fn extend<'a, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        self.libs.extend(
            entries
                .into_iter()
                .map(|(name, url)| (name.clone(), url.clone())),
        );
    }

    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.libs.insert(name.into(), url.into());
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.libs.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.libs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_builtin_libs() {
        let table = LibraryTable::default();
        assert_eq!(
            table.get("jquery"),
            Some("https://ajax.googleapis.com/ajax/libs/jquery/3.1.1/jquery.min.js")
        );
        assert_eq!(table.get("jquery"), table.get("jquery3"));
        assert_eq!(table.get("three.js"), table.get("threejs"));
        assert_eq!(
            table.get("vue"),
            Some("https://cdnjs.cloudflare.com/ajax/libs/vue/2.0.3/vue.js")
        );
        assert_eq!(table.len(), BUILTIN_LIBS.len());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = LibraryTable::default();
        assert_eq!(table.get("jQuery"), None);
    }

    #[test]
    fn test_overrides_keep_builtins() {
        let host: HashMap<String, String> = HashMap::from([
            ("d3".into(), "https://d3js.org/d3.v4.min.js".into()),
            ("jquery".into(), "https://code.jquery.com/jquery-3.7.1.min.js".into()),
        ]);
        let table = LibraryTable::with_overrides(&host);

        assert_eq!(table.get("d3"), Some("https://d3js.org/d3.v4.min.js"));
        assert_eq!(
            table.get("jquery"),
            Some("https://code.jquery.com/jquery-3.7.1.min.js")
        );
        assert!(table.get("vue").is_some());
        assert!(table.get("jquery2").is_some());
        assert_eq!(table.len(), BUILTIN_LIBS.len() + 1);
    }

    #[test]
    fn test_empty_table() {
        let mut table = LibraryTable::empty();
        assert!(table.is_empty());
        table.insert("fake", "https://cdn.test/fake.js");
        assert_eq!(table.get("fake"), Some("https://cdn.test/fake.js"));
    }
}
