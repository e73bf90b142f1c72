//! Read-only single-namespace projection of a name-keyed table.
//!
//! Symbol tables produced by schema processing are keyed by extended
//! names (`{uri}local`, or bare `local` for no-namespace entries).
//! [`NamespaceView`] restricts such a table to one target namespace and
//! exposes the matching entries under their local names. The view
//! borrows the backing table and holds no data of its own beyond the
//! target; it is meant to be constructed fresh per query.

use core::fmt;

use serde_json::Value;

use crate::FastIndexMap;

/// Ephemeral projection of an extended-name-keyed table onto one namespace.
///
/// An empty target namespace selects the entries without one.
///
/// # Beispiel
///
/// ```
/// use nsmap::{FastIndexMap, NamespaceView};
///
/// let mut table = FastIndexMap::default();
/// table.insert("{tns0}name0".to_string(), 0);
/// table.insert("{tns1}name1".to_string(), 1);
/// table.insert("name2".to_string(), 2);
///
/// let view = NamespaceView::new(&table, "tns1");
/// assert!(view.contains("name1"));
/// assert_eq!(view.get("name1"), Some(&1));
/// assert_eq!(view.len(), 1);
/// ```
pub struct NamespaceView<'a, V> {
    table: &'a FastIndexMap<String, V>,
    namespace: String,
    /// `{namespace}`, precomputed; empty when the target is the
    /// no-namespace one.
    key_prefix: String,
}

impl<'a, V> NamespaceView<'a, V> {
    /// Creates a view of `table` restricted to `namespace`.
    pub fn new(table: &'a FastIndexMap<String, V>, namespace: &str) -> Self {
        let key_prefix = if namespace.is_empty() {
            String::new()
        } else {
            format!("{{{namespace}}}")
        };
        Self {
            table,
            namespace: namespace.to_string(),
            key_prefix,
        }
    }

    /// The target namespace (possibly empty).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The entry for `local_name` in the target namespace.
    pub fn get(&self, local_name: &str) -> Option<&'a V> {
        if self.key_prefix.is_empty() {
            self.table.get(local_name)
        } else {
            self.table.get(&format!("{}{local_name}", self.key_prefix))
        }
    }

    /// Whether the backing table has `local_name` in the target namespace.
    ///
    /// Extended keys never match: the probe is a local name, not a key.
    pub fn contains(&self, local_name: &str) -> bool {
        self.get(local_name).is_some()
    }

    /// Membership probe for dynamically typed values; non-string probes
    /// are never contained.
    pub fn contains_value(&self, probe: &Value) -> bool {
        matches!(probe, Value::String(s) if self.contains(s))
    }

    /// Iterates `(local_name, value)` for the entries whose key namespace
    /// equals the target, in backing-table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a V)> + '_ {
        self.table.iter().filter_map(move |(key, value)| {
            if self.key_prefix.is_empty() {
                (!key.starts_with('{')).then(|| (key.as_str(), value))
            } else {
                key.strip_prefix(self.key_prefix.as_str())
                    .map(|local| (local, value))
            }
        })
    }

    /// Number of entries in the projection.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the projection selects nothing.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<V: Clone> NamespaceView<'_, V> {
    /// Materializes the filtered subset. Keys are local names, or the
    /// original extended keys when `keep_extended` is set.
    pub fn as_dict(&self, keep_extended: bool) -> FastIndexMap<String, V> {
        if keep_extended {
            self.table
                .iter()
                .filter(|(key, _)| {
                    if self.key_prefix.is_empty() {
                        !key.starts_with('{')
                    } else {
                        key.starts_with(self.key_prefix.as_str())
                    }
                })
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        } else {
            self.iter()
                .map(|(local, value)| (local.to_string(), value.clone()))
                .collect()
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for NamespaceView<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NamespaceView(")?;
        f.debug_map().entries(self.iter()).finish()?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> FastIndexMap<String, i32> {
        let mut table = FastIndexMap::default();
        table.insert("{tns0}name0".to_string(), 0);
        table.insert("{tns1}name1".to_string(), 1);
        table.insert("name2".to_string(), 2);
        table
    }

    #[test]
    fn view_selects_target_namespace() {
        let table = table();
        let view = NamespaceView::new(&table, "tns1");
        assert_eq!(view.namespace(), "tns1");
        assert_eq!(view.len(), 1);
        assert_eq!(view.get("name1"), Some(&1));
        let entries: Vec<(&str, &i32)> = view.iter().collect();
        assert_eq!(entries, [("name1", &1)]);
    }

    #[test]
    fn contains_probes_local_names_only() {
        let table = table();
        let view = NamespaceView::new(&table, "tns1");

        assert!(view.contains("name1"));
        assert!(!view.contains("{tns1}name1"));
        assert!(!view.contains("{tns0}name0"));
        assert!(!view.contains("name0"));
        assert!(!view.contains("name2"));
    }

    #[test]
    fn contains_value_rejects_non_strings() {
        let table = table();
        let view = NamespaceView::new(&table, "tns1");

        assert!(view.contains_value(&json!("name1")));
        assert!(!view.contains_value(&json!(1)));
        assert!(!view.contains_value(&Value::Null));
        assert!(!view.contains_value(&json!(["name1"])));
    }

    /// Empty target selects the no-namespace entries, never extended keys.
    #[test]
    fn empty_target_selects_unqualified_entries() {
        let table = table();
        let view = NamespaceView::new(&table, "");

        assert_eq!(view.len(), 1);
        assert!(view.contains("name2"));
        assert!(!view.contains("name0"));
        let entries: Vec<(&str, &i32)> = view.iter().collect();
        assert_eq!(entries, [("name2", &2)]);
    }

    /// The key prefix must match exactly: `tns1` does not select `tns10`.
    #[test]
    fn prefix_match_is_exact() {
        let mut table = FastIndexMap::default();
        table.insert("{tns1}a".to_string(), 1);
        table.insert("{tns10}b".to_string(), 2);

        let view = NamespaceView::new(&table, "tns1");
        assert_eq!(view.len(), 1);
        assert!(view.contains("a"));
        assert!(!view.contains("b"));
    }

    #[test]
    fn as_dict_local_and_extended_keys() {
        let mut table = FastIndexMap::default();
        table.insert("{tns0}name0".to_string(), 0);
        table.insert("{tns1}name1".to_string(), 1);
        table.insert("{tns1}name2".to_string(), 2);
        table.insert("name3".to_string(), 3);

        let view = NamespaceView::new(&table, "tns1");
        let local = view.as_dict(false);
        assert_eq!(local.len(), 2);
        assert_eq!(local.get("name1"), Some(&1));
        assert_eq!(local.get("name2"), Some(&2));

        let extended = view.as_dict(true);
        assert_eq!(extended.len(), 2);
        assert_eq!(extended.get("{tns1}name1"), Some(&1));
        assert_eq!(extended.get("{tns1}name2"), Some(&2));

        let view = NamespaceView::new(&table, "");
        assert_eq!(view.as_dict(false).get("name3"), Some(&3));
        assert_eq!(view.as_dict(true).get("name3"), Some(&3));
    }

    #[test]
    fn empty_view() {
        let table = table();
        let view = NamespaceView::new(&table, "tns-missing");
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
        assert!(view.as_dict(false).is_empty());
    }

    #[test]
    fn debug_renders_filtered_subset() {
        let table = table();
        let view = NamespaceView::new(&table, "tns0");
        assert_eq!(format!("{view:?}"), r#"NamespaceView({"name0": 0})"#);
    }
}
