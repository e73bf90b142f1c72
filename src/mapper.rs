//! Scoped prefix → namespace resolution.
//!
//! [`NamespaceMapper`] tracks the prefix bindings visible at the current
//! position of a document traversal and translates names between the
//! extended form (`{uri}local`) and the prefixed lexical form
//! (`prefix:local`).
//!
//! The traversal does not have to be recursive: scopes are keyed by an
//! opaque, caller-supplied *depth* marker (tree nesting level, stream
//! offset — anything monotonic per branch) and undone by an explicit
//! undo-log stack instead of the language call stack. A pull-based
//! streaming driver can therefore call [`NamespaceMapper::push_namespaces`]
//! and [`NamespaceMapper::pop_namespaces`] at arbitrary points.
//!
//! Unknown namespaces and unbound prefixes are never errors: translation
//! returns the input unchanged so the mapper stays usable mid-stream,
//! before all bindings have been discovered.

use log::{debug, trace};
use serde_json::Value;

use crate::name;
use crate::{FastHashMap, FastHashSet, FastIndexMap, Result};

/// One scope frame: the depth it was opened at and, per binding it
/// applied, the prefix together with its previous URI (`None` = the
/// prefix was absent before).
#[derive(Debug, Clone)]
struct NamespaceContext {
    depth: usize,
    undo: Vec<(String, Option<String>)>,
}

/// Stateful resolver between extended and prefixed name forms.
///
/// # Beispiel
///
/// ```
/// use nsmap::{NamespaceMapper, XSD_NAMESPACE};
///
/// let mut mapper = NamespaceMapper::new([("xs", XSD_NAMESPACE)]);
/// assert_eq!(
///     mapper.map_qname("{http://www.w3.org/2001/XMLSchema}element").unwrap(),
///     "xs:element",
/// );
///
/// mapper.push_namespaces(2, [("tns", "http://example.com/ns")]);
/// assert_eq!(mapper.unmap_qname("tns:item").unwrap(), "{http://example.com/ns}item");
/// mapper.pop_namespaces(2);
/// assert_eq!(mapper.unmap_qname("tns:item").unwrap(), "tns:item");
/// ```
#[derive(Debug, Clone)]
pub struct NamespaceMapper {
    /// Live prefix → URI bindings, in insertion order.
    namespaces: FastIndexMap<String, String>,
    /// Derived URI → prefix index; last writer wins on URI collisions.
    uri_to_prefix: FastHashMap<String, String>,
    /// Open scope frames, LIFO by increasing depth.
    contexts: Vec<NamespaceContext>,
    process_namespaces: bool,
    strip_namespaces: bool,
}

impl NamespaceMapper {
    /// Creates a mapper from an initial set of prefix bindings.
    ///
    /// The bindings are copied into owned storage; the mapper never
    /// aliases a caller-held map. Namespace processing is enabled and
    /// stripping disabled by default.
    pub fn new<I, K, V>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut mapper = Self {
            namespaces: FastIndexMap::default(),
            uri_to_prefix: FastHashMap::default(),
            contexts: Vec::new(),
            process_namespaces: true,
            strip_namespaces: false,
        };
        for (prefix, uri) in namespaces {
            mapper.insert(prefix, uri);
        }
        mapper
    }

    /// If `false`, [`Self::map_qname`] and [`Self::unmap_qname`] are
    /// identity functions.
    pub fn with_process_namespaces(mut self, process_namespaces: bool) -> Self {
        self.process_namespaces = process_namespaces;
        self
    }

    /// If `true`, [`Self::map_qname`] drops the namespace component and
    /// returns the bare local part. [`Self::unmap_qname`] is unaffected
    /// by this flag.
    pub fn with_strip_namespaces(mut self, strip_namespaces: bool) -> Self {
        self.strip_namespaces = strip_namespaces;
        self
    }

    /// Whether name translation is enabled at all.
    pub fn process_namespaces(&self) -> bool {
        self.process_namespaces
    }

    /// Whether mapping drops namespace components instead of prefixing.
    pub fn strip_namespaces(&self) -> bool {
        self.strip_namespaces
    }

    /// Derived flag: translation actually maps through prefixes
    /// (processing enabled and stripping disabled).
    pub fn use_namespaces(&self) -> bool {
        self.process_namespaces && !self.strip_namespaces
    }

    /// Borrowed view of the live prefix → URI bindings.
    pub fn namespaces(&self) -> &FastIndexMap<String, String> {
        &self.namespaces
    }

    /// The namespace bound to the empty prefix, if any.
    pub fn default_namespace(&self) -> Option<&str> {
        self.namespaces.get("").map(String::as_str)
    }

    /// The URI bound to `prefix`, if any.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.namespaces.get(prefix).map(String::as_str)
    }

    /// Whether `prefix` is currently bound.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.namespaces.contains_key(prefix)
    }

    /// Binds `prefix` to `uri`, returning the previous URI if the prefix
    /// was already bound. The reverse index entry for `uri` is rebuilt;
    /// on URI collisions across prefixes the last writer wins.
    pub fn insert(&mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Option<String> {
        let prefix = prefix.into();
        let uri = uri.into();
        self.uri_to_prefix.insert(uri.clone(), prefix.clone());
        self.namespaces.insert(prefix, uri)
    }

    /// Unbinds `prefix`, returning its URI.
    ///
    /// The reverse entry for that URI is removed only if this prefix was
    /// its current holder, then repaired: the most recently inserted
    /// other prefix bound to the same URI takes over.
    pub fn remove(&mut self, prefix: &str) -> Option<String> {
        let uri = self.namespaces.shift_remove(prefix)?;
        if self.uri_to_prefix.get(&uri).map(String::as_str) == Some(prefix) {
            self.uri_to_prefix.remove(&uri);
            for (other, bound) in self.namespaces.iter().rev() {
                if *bound == uri {
                    self.uri_to_prefix.insert(uri.clone(), other.clone());
                    break;
                }
            }
        }
        Some(uri)
    }

    /// Iterates the live `(prefix, uri)` bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.namespaces
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of live bindings.
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// Whether no prefix is bound.
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Removes all bindings, the reverse index, and any open scopes.
    pub fn clear(&mut self) {
        self.namespaces.clear();
        self.uri_to_prefix.clear();
        self.contexts.clear();
    }

    /// Number of currently open scope frames.
    pub fn context_count(&self) -> usize {
        self.contexts.len()
    }

    /// Opens a scope at `depth` and applies the discovered bindings.
    ///
    /// Any still-open frame recorded at a depth ≥ `depth` belongs to a
    /// sibling or deeper position the traversal has left; those frames
    /// are closed first, restoring their prior bindings. An empty batch
    /// closes stale frames but opens no new one.
    pub fn push_namespaces<I, K, V>(&mut self, depth: usize, bindings: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.pop_namespaces(depth);

        let mut undo = Vec::new();
        for (prefix, uri) in bindings {
            let prefix = prefix.into();
            undo.push((prefix.clone(), self.namespaces.get(&prefix).cloned()));
            self.insert(prefix, uri.into());
        }
        if !undo.is_empty() {
            debug!("open namespace scope at depth {depth} ({} bindings)", undo.len());
            self.contexts.push(NamespaceContext { depth, undo });
        }
    }

    /// Closes every scope opened at a depth ≥ `depth`, restoring the
    /// bindings recorded in each frame. Frames below `depth` stay open.
    pub fn pop_namespaces(&mut self, depth: usize) {
        while self.contexts.last().is_some_and(|c| c.depth >= depth) {
            let Some(context) = self.contexts.pop() else {
                break;
            };
            trace!(
                "close namespace scope at depth {} ({} bindings)",
                context.depth,
                context.undo.len()
            );
            // Rückwärts wiederherstellen, damit doppelte Prefixe innerhalb
            // eines Frames in der richtigen Reihenfolge zurückgesetzt werden.
            for (prefix, previous) in context.undo.into_iter().rev() {
                self.remove(&prefix);
                if let Some(uri) = previous {
                    self.insert(prefix, uri);
                }
            }
        }
    }

    /// Maps an extended name to its prefixed lexical form.
    ///
    /// - namespace processing disabled: `name` is returned unchanged;
    /// - no namespace component: unchanged;
    /// - stripping enabled: the bare local part;
    /// - namespace held by a non-empty prefix: `prefix:local`;
    /// - namespace held by the empty prefix (default namespace): `local`;
    /// - unknown namespace: unchanged — never an error.
    ///
    /// Fails with [`Error::MalformedName`](crate::Error::MalformedName)
    /// on bad brace syntax.
    pub fn map_qname(&self, name: &str) -> Result<String> {
        if !self.process_namespaces {
            return Ok(name.to_string());
        }
        let (namespace, local) = name::parse_extended(name)?;
        let Some(namespace) = namespace else {
            return Ok(name.to_string());
        };
        if self.strip_namespaces {
            return Ok(local.to_string());
        }
        match self.uri_to_prefix.get(namespace) {
            Some(prefix) if !prefix.is_empty() => Ok(format!("{prefix}:{local}")),
            Some(_) => Ok(local.to_string()),
            None => Ok(name.to_string()),
        }
    }

    /// Maps a dynamically typed value, failing with
    /// [`Error::TypeMismatch`](crate::Error::TypeMismatch) before any
    /// parsing if it is not string-like.
    pub fn map_qname_value(&self, value: &Value) -> Result<String> {
        self.map_qname(name::expect_text(value)?)
    }

    /// Unmaps a prefixed lexical name to its extended form.
    ///
    /// - namespace processing disabled, empty input, or input already in
    ///   extended form: unchanged;
    /// - bound prefix: `{uri}local`;
    /// - unbound prefix: unchanged — unresolved prefixes are opaque,
    ///   not errors;
    /// - no prefix with a default namespace bound: `{default}local`;
    /// - no prefix, no default namespace: unchanged.
    ///
    /// `strip_namespaces` has no effect here.
    ///
    /// Fails with [`Error::MalformedName`](crate::Error::MalformedName)
    /// when more than one `:` separator is present.
    pub fn unmap_qname(&self, name: &str) -> Result<String> {
        self.unmap_qname_impl(name, None)
    }

    /// Like [`Self::unmap_qname`], but names in `exempt_names` are
    /// returned unchanged — a bypass for names intentionally left
    /// unqualified (e.g. keys of an unqualified-form symbol table).
    pub fn unmap_qname_with_exemptions(
        &self,
        name: &str,
        exempt_names: &FastHashSet<String>,
    ) -> Result<String> {
        self.unmap_qname_impl(name, Some(exempt_names))
    }

    /// Unmaps a dynamically typed value, failing with
    /// [`Error::TypeMismatch`](crate::Error::TypeMismatch) before any
    /// parsing if it is not string-like.
    pub fn unmap_qname_value(&self, value: &Value) -> Result<String> {
        self.unmap_qname(name::expect_text(value)?)
    }

    fn unmap_qname_impl(
        &self,
        name: &str,
        exempt_names: Option<&FastHashSet<String>>,
    ) -> Result<String> {
        if !self.process_namespaces || name.is_empty() || name.starts_with('{') {
            return Ok(name.to_string());
        }
        if exempt_names.is_some_and(|table| table.contains(name)) {
            return Ok(name.to_string());
        }
        let (prefix, local) = name::split_prefixed(name)?;
        match prefix {
            Some(prefix) => match self.namespaces.get(prefix) {
                Some(uri) => Ok(name::format_extended(uri, local)),
                None => Ok(name.to_string()),
            },
            None => match self.default_namespace() {
                Some(uri) if !uri.is_empty() => Ok(name::format_extended(uri, local)),
                _ => Ok(name.to_string()),
            },
        }
    }
}

impl Default for NamespaceMapper {
    fn default() -> Self {
        Self::new::<_, String, String>([])
    }
}
