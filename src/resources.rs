//! Namespace → resource location multimap.
//!
//! During import/include resolution a schema loader discovers, for each
//! target namespace, one or more resource identifiers (schema locations).
//! [`NamespaceResourcesMap`] records them per URI, in discovery order,
//! with duplicates retained — the loader decides later which ones to
//! actually fetch.
//!
//! Lifecycle: entries accumulate monotonically; a URI is only ever
//! appended to or deleted whole.

use core::fmt;

use crate::FastIndexMap;

/// Ordered multimap from namespace URI to resource identifiers.
///
/// # Beispiel
///
/// ```
/// use nsmap::NamespaceResourcesMap;
///
/// let map: NamespaceResourcesMap<&str> =
///     [("tns0", "schema1.xsd"), ("tns0", "schema2.xsd")].into_iter().collect();
/// assert_eq!(map.get("tns0"), Some(&["schema1.xsd", "schema2.xsd"][..]));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Clone)]
pub struct NamespaceResourcesMap<T> {
    map: FastIndexMap<String, Vec<T>>,
}

impl<T> NamespaceResourcesMap<T> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            map: FastIndexMap::default(),
        }
    }

    /// Appends a resource to the (possibly newly created) list for `uri`.
    pub fn insert(&mut self, uri: impl Into<String>, resource: T) {
        self.map.entry(uri.into()).or_default().push(resource);
    }

    /// The resources recorded for `uri`, in insertion order.
    pub fn get(&self, uri: &str) -> Option<&[T]> {
        self.map.get(uri).map(Vec::as_slice)
    }

    /// Whether any resources are recorded for `uri`.
    pub fn contains_uri(&self, uri: &str) -> bool {
        self.map.contains_key(uri)
    }

    /// Removes `uri` together with its whole resource list.
    pub fn remove(&mut self, uri: &str) -> Option<Vec<T>> {
        self.map.shift_remove(uri)
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Number of namespace URIs (not resources).
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no URI is recorded.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates `(uri, resources)` in URI insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Iterates the recorded namespace URIs in insertion order.
    pub fn uris(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }
}

impl<T> Default for NamespaceResourcesMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality is plain URI → list equality; cross-URI order is insignificant.
impl<T: PartialEq> PartialEq for NamespaceResourcesMap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<T: Eq> Eq for NamespaceResourcesMap<T> {}

/// Comparison against a plain uri → list mapping.
impl<T: PartialEq> PartialEq<FastIndexMap<String, Vec<T>>> for NamespaceResourcesMap<T> {
    fn eq(&self, other: &FastIndexMap<String, Vec<T>>) -> bool {
        self.map == *other
    }
}

impl<S: Into<String>, T> FromIterator<(S, T)> for NamespaceResourcesMap<T> {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<S: Into<String>, T> Extend<(S, T)> for NamespaceResourcesMap<T> {
    fn extend<I: IntoIterator<Item = (S, T)>>(&mut self, iter: I) {
        for (uri, resource) in iter {
            self.insert(uri, resource);
        }
    }
}

/// Renders like a plain uri → list mapping.
impl<T: fmt::Debug> fmt::Debug for NamespaceResourcesMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map() {
        let map: NamespaceResourcesMap<String> = NamespaceResourcesMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.get("tns0"), None);
    }

    #[test]
    fn from_pairs_appends_per_uri() {
        let map: NamespaceResourcesMap<&str> =
            [("tns0", "schema1.xsd")].into_iter().collect();
        assert_eq!(map.get("tns0"), Some(&["schema1.xsd"][..]));

        let map: NamespaceResourcesMap<&str> =
            [("tns0", "schema1.xsd"), ("tns0", "schema2.xsd")]
                .into_iter()
                .collect();
        assert_eq!(map.get("tns0"), Some(&["schema1.xsd", "schema2.xsd"][..]));
        assert_eq!(map.len(), 1);
    }

    /// Duplicates are retained in insertion order.
    #[test]
    fn duplicates_are_kept() {
        let mut map = NamespaceResourcesMap::new();
        map.insert("tns0", "a.xsd");
        map.insert("tns0", "a.xsd");
        assert_eq!(map.get("tns0"), Some(&["a.xsd", "a.xsd"][..]));
    }

    #[test]
    fn mapping_methods() {
        let mut map = NamespaceResourcesMap::new();
        map.insert("tns0", "schema1.xsd");
        map.insert("tns1", "schema2.xsd");

        assert_eq!(map.len(), 2);
        assert!(map.contains_uri("tns0"));
        let uris: Vec<&str> = map.uris().collect();
        assert_eq!(uris, ["tns0", "tns1"]);

        assert_eq!(map.remove("tns0"), Some(vec!["schema1.xsd"]));
        assert_eq!(map.len(), 1);
        assert!(!map.contains_uri("tns0"));
        assert_eq!(map.remove("tns0"), None);

        map.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn delete_discards_whole_list() {
        let mut map: NamespaceResourcesMap<&str> =
            [("a", "x"), ("a", "y")].into_iter().collect();
        let expected: NamespaceResourcesMap<&str> =
            [("a", "x"), ("a", "y")].into_iter().collect();
        assert_eq!(map, expected);

        map.remove("a");
        assert!(map.is_empty());
    }

    #[test]
    fn equality_against_plain_mapping() {
        let map: NamespaceResourcesMap<&str> =
            [("a", "x"), ("a", "y")].into_iter().collect();

        let mut plain: FastIndexMap<String, Vec<&str>> = FastIndexMap::default();
        plain.insert("a".to_string(), vec!["x", "y"]);
        assert_eq!(map, plain);

        plain.insert("b".to_string(), vec!["z"]);
        assert_ne!(map, plain);
    }

    #[test]
    fn equality_ignores_uri_order() {
        let ab: NamespaceResourcesMap<&str> =
            [("a", "x"), ("b", "y")].into_iter().collect();
        let ba: NamespaceResourcesMap<&str> =
            [("b", "y"), ("a", "x")].into_iter().collect();
        assert_eq!(ab, ba);

        let other: NamespaceResourcesMap<&str> =
            [("a", "y"), ("b", "y")].into_iter().collect();
        assert_ne!(ab, other);
    }

    #[test]
    fn debug_renders_as_plain_mapping() {
        let mut map = NamespaceResourcesMap::new();
        map.insert("tns0", "schema1.xsd");
        map.insert("tns1", "schema2.xsd");
        assert_eq!(
            format!("{map:?}"),
            r#"{"tns0": ["schema1.xsd"], "tns1": ["schema2.xsd"]}"#
        );
    }
}
