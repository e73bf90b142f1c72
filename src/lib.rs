//! nsmap – namespace-qualified name resolution for XML document and
//! schema processing.
//!
//! Three cooperating pieces share one name representation:
//!
//! - [`NamespaceMapper`] — a stateful resolver between the extended name
//!   form (`{uri}local`) and the prefixed lexical form (`prefix:local`),
//!   tracking which prefix bindings are visible at the current position
//!   of a streaming or recursive traversal via depth-keyed scopes.
//! - [`NamespaceResourcesMap`] — an ordered multimap recording, per
//!   target namespace, the known resource locations (schema imports and
//!   includes).
//! - [`NamespaceView`] — a read-only projection restricting a larger
//!   extended-name-keyed table to one namespace.
//!
//! # Beispiel
//!
//! ```
//! use nsmap::{NamespaceMapper, XSD_NAMESPACE};
//!
//! let mut mapper = NamespaceMapper::new([("xs", XSD_NAMESPACE)]);
//! assert_eq!(
//!     mapper.map_qname("{http://www.w3.org/2001/XMLSchema}element").unwrap(),
//!     "xs:element",
//! );
//!
//! // A traversal driver discovers a binding two levels deep ...
//! mapper.push_namespaces(2, [("tns", "http://example.com/ns")]);
//! assert_eq!(mapper.unmap_qname("tns:item").unwrap(), "{http://example.com/ns}item");
//!
//! // ... and leaves that subtree again.
//! mapper.pop_namespaces(2);
//! assert_eq!(mapper.unmap_qname("tns:item").unwrap(), "tns:item");
//! ```

pub mod error;
pub mod mapper;
pub mod name;
pub mod resources;
pub mod view;

pub use error::{Error, Result};

/// HashMap mit ahash (schneller, nicht DoS-resistent — für interne Datenstrukturen).
pub type FastHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// HashSet mit ahash.
pub type FastHashSet<K> = hashbrown::HashSet<K, ahash::RandomState>;

/// IndexMap mit ahash (deterministische Iteration + schnelles Hashing).
pub type FastIndexMap<K, V> = indexmap::IndexMap<K, V, ahash::RandomState>;

// Public API: Resolver
pub use mapper::NamespaceMapper;

// Public API: Name codec
pub use name::{
    format_extended, parse_extended, split_prefixed, XMLNS_NAMESPACE, XML_NAMESPACE,
    XSD_NAMESPACE, XSI_NAMESPACE,
};

// Public API: Resource index
pub use resources::NamespaceResourcesMap;

// Public API: Filtered view
pub use view::NamespaceView;
