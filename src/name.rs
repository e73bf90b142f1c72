//! Extended and prefixed name syntax.
//!
//! XML processing juggles two lexical forms of the same name:
//!
//! - **Extended**: `{namespace-uri}local-name` — embeds the namespace
//!   unambiguously, no prefix binding required.
//! - **Prefixed (QName)**: `prefix:local-name` or bare `local-name` —
//!   needs a prefix→URI binding to resolve.
//!
//! This module is the stateless codec shared by the mapper, the resource
//! index, and the filtered view: it splits, validates, and formats both
//! forms, and gates dynamically typed inputs on string-likeness.

use serde_json::Value;

use crate::{Error, Result};

/// XML Schema namespace URI.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// XML Schema instance namespace URI.
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// The `xml` prefix namespace URI.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// The `xmlns` declaration namespace URI.
pub const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";

/// Splits an extended name `{uri}local` into its namespace and local parts.
///
/// Returns `(None, name)` when the name has no leading `{`. Fails with
/// [`Error::MalformedName`] on any other brace arrangement: a missing
/// closing brace, a nested brace inside the URI, or stray braces after
/// the local part.
///
/// # Beispiel
///
/// ```
/// use nsmap::name::parse_extended;
///
/// let (ns, local) = parse_extended("{http://example.com/ns}item").unwrap();
/// assert_eq!(ns, Some("http://example.com/ns"));
/// assert_eq!(local, "item");
///
/// assert_eq!(parse_extended("item").unwrap(), (None, "item"));
/// assert!(parse_extended("{http://example.com/ns").is_err());
/// ```
pub fn parse_extended(name: &str) -> Result<(Option<&str>, &str)> {
    let Some(rest) = name.strip_prefix('{') else {
        return Ok((None, name));
    };
    let Some(end) = rest.find('}') else {
        return Err(Error::malformed(name));
    };
    let (uri, local) = (&rest[..end], &rest[end + 1..]);
    // uri kann kein '}' enthalten (erstes '}' wurde als Ende genommen)
    if uri.contains('{') || local.contains('{') || local.contains('}') {
        return Err(Error::malformed(name));
    }
    Ok((Some(uri), local))
}

/// Splits a prefixed QName on its first `:`.
///
/// Returns `(None, qname)` for unprefixed names. Fails with
/// [`Error::MalformedName`] when more than one `:` is present
/// (`xs::element`, `a:b:c`).
pub fn split_prefixed(qname: &str) -> Result<(Option<&str>, &str)> {
    match qname.split_once(':') {
        None => Ok((None, qname)),
        Some((prefix, local)) => {
            if local.contains(':') {
                Err(Error::malformed(qname))
            } else {
                Ok((Some(prefix), local))
            }
        }
    }
}

/// Builds an extended name from a namespace URI and a local name.
///
/// An empty URI means "no namespace" and yields the bare local name.
pub fn format_extended(uri: &str, local: &str) -> String {
    if uri.is_empty() {
        local.to_string()
    } else {
        format!("{{{uri}}}{local}")
    }
}

/// Checks that a dynamically typed value is string-like and returns the text.
///
/// Names reaching the translation entry points may come from decoded
/// document content whose type is only known at runtime. Anything but a
/// string fails with [`Error::TypeMismatch`], before any parsing.
pub fn expect_text(value: &Value) -> Result<&str> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(Error::TypeMismatch {
            found: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
