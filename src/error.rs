//! Central error types for namespace-qualified name handling.
//!
//! Only two things can go wrong at the translation/parsing entry points:
//! the input is not text at all, or the text violates the extended/prefixed
//! name grammar. Unresolved prefixes and unknown namespaces are deliberately
//! *not* errors — see [`crate::mapper`].

use core::fmt;

/// Errors raised by the name codec and the namespace mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A string fails the extended-name (`{uri}local`) or prefixed-name
    /// (`prefix:local`) grammar: unbalanced or nested braces, or more than
    /// one `:` separator.
    MalformedName {
        /// The offending input, verbatim.
        name: String,
    },
    /// An input expected to be string-like is not. Detected before any
    /// parsing; indicates a programming error at the call site.
    TypeMismatch {
        /// Type name of the value that was found instead.
        found: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedName { name } => {
                write!(f, "invalid value '{name}' for an extended or prefixed name")
            }
            Self::TypeMismatch { found } => {
                write!(f, "{found} value must be a string-like object")
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Erstellt einen `MalformedName` Fehler für die gegebene Eingabe.
    pub fn malformed(name: impl Into<String>) -> Self {
        Self::MalformedName { name: name.into() }
    }
}

/// A convenience `Result` type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_name_display() {
        let e = Error::malformed("{unclosed");
        let msg = e.to_string();
        assert!(msg.contains("invalid value"), "{msg}");
        assert!(msg.contains("{unclosed"), "{msg}");
    }

    #[test]
    fn type_mismatch_display() {
        let e = Error::TypeMismatch { found: "number" };
        let msg = e.to_string();
        assert!(msg.contains("must be a string-like object"), "{msg}");
        assert!(msg.contains("number"), "{msg}");
    }

    #[test]
    fn error_implements_std_error() {
        let e: Box<dyn std::error::Error> = Box::new(Error::malformed("a:b:c"));
        assert!(!e.to_string().is_empty());
    }

    #[test]
    fn error_is_clone_and_eq() {
        let e1 = Error::TypeMismatch { found: "null" };
        let e2 = e1.clone();
        assert_eq!(e1, e2);
    }

    #[test]
    fn result_type_alias_works() {
        let ok: Result<u32> = Ok(42);
        assert_eq!(ok.unwrap(), 42);

        let err: Result<u32> = Err(Error::malformed(""));
        assert!(err.is_err());
    }
}
