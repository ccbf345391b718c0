//! The [`JsonPointer`] type: parsing, serialization, and the get/set entry
//! points.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{ParseError, ResolutionError};
use crate::escape::{escape_reference_token, unescape_reference_token};
use crate::resolve::{resolve, resolve_mut, NodeKind};

/// A parsed JSON Pointer (RFC 6901).
///
/// A pointer is constructed once from a string and is immutable thereafter;
/// it can be reused for any number of [`get`](JsonPointer::get) and
/// [`set`](JsonPointer::set) calls against different documents. Stored
/// reference tokens are fully unescaped.
///
/// # Example
///
/// ```
/// use jsonpointer::JsonPointer;
/// use serde_json::json;
///
/// let doc = json!({"foo": ["bar", "baz"]});
/// let pointer = JsonPointer::parse("/foo/0").unwrap();
/// let (value, _kind) = pointer.get(&doc).unwrap();
/// assert_eq!(value, &json!("bar"));
/// assert_eq!(pointer.to_string(), "/foo/0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPointer {
    reference_tokens: Vec<String>,
    has_fragment: bool,
}

impl JsonPointer {
    /// Parse a JSON Pointer string.
    ///
    /// The empty string denotes the whole document. A non-empty pointer must
    /// start with `/`, or use the URI-fragment form: `#` alone (equivalent
    /// to empty) or `#` followed by `/`. Each token is unescaped before
    /// being stored; token content is not otherwise validated here, since
    /// whether a token is e.g. a valid array index depends on the node it
    /// meets during traversal.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidStart`] for any other leading character,
    /// including a `#` followed by something other than `/`.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonpointer::JsonPointer;
    ///
    /// assert!(JsonPointer::parse("").unwrap().is_root());
    /// assert_eq!(
    ///     JsonPointer::parse("/a~1b/c~0d").unwrap().reference_tokens(),
    ///     &["a/b".to_string(), "c~d".to_string()]
    /// );
    /// assert!(JsonPointer::parse("foo").is_err());
    /// ```
    pub fn parse(pointer: &str) -> Result<JsonPointer, ParseError> {
        let (rest, has_fragment) = match pointer.strip_prefix('#') {
            Some(rest) => (rest, true),
            None => (pointer, false),
        };

        if rest.is_empty() {
            return Ok(JsonPointer {
                reference_tokens: Vec::new(),
                has_fragment,
            });
        }

        let rest = rest.strip_prefix('/').ok_or(ParseError::InvalidStart)?;
        // "/" yields one empty token, not zero
        let reference_tokens = rest.split('/').map(unescape_reference_token).collect();

        Ok(JsonPointer {
            reference_tokens,
            has_fragment,
        })
    }

    /// The decoded reference tokens, in traversal order.
    pub fn reference_tokens(&self) -> &[String] {
        &self.reference_tokens
    }

    /// Whether this pointer addresses the whole document (zero tokens).
    pub fn is_root(&self) -> bool {
        self.reference_tokens.is_empty()
    }

    /// Whether the pointer was written in URI-fragment form (`#/...`).
    pub fn has_fragment(&self) -> bool {
        self.has_fragment
    }

    /// Resolve the pointer against a document, returning the target value
    /// and its runtime kind.
    ///
    /// The empty pointer returns the document root itself.
    ///
    /// # Errors
    ///
    /// The first failing traversal step aborts the call with a
    /// [`ResolutionError`] carrying the offending token.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonpointer::{JsonPointer, NodeKind};
    /// use serde_json::json;
    ///
    /// let doc = json!({"obj": {"a": 1}});
    /// let (value, kind) = JsonPointer::parse("/obj").unwrap().get(&doc).unwrap();
    /// assert_eq!(value, &json!({"a": 1}));
    /// assert_eq!(kind, NodeKind::Object);
    /// ```
    pub fn get<'a>(&self, document: &'a Value) -> Result<(&'a Value, NodeKind), ResolutionError> {
        let node = resolve(document, &self.reference_tokens)?;
        Ok((node, NodeKind::of(node)))
    }

    /// Resolve the pointer to a mutable reference into the document.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`get`](JsonPointer::get).
    pub fn get_mut<'a>(&self, document: &'a mut Value) -> Result<&'a mut Value, ResolutionError> {
        resolve_mut(document, &self.reference_tokens)
    }

    /// Overwrite the value the pointer addresses, in place.
    ///
    /// Only the final token's target is replaced; intermediate nodes are
    /// never mutated. The empty pointer overwrites the document root's
    /// contents through the caller's `&mut` binding.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`get`](JsonPointer::get); on error the
    /// document is left unmodified.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonpointer::JsonPointer;
    /// use serde_json::json;
    ///
    /// let mut doc = json!({"foo": ["bar", "baz"]});
    /// JsonPointer::parse("/foo/0").unwrap().set(&mut doc, json!("qux")).unwrap();
    /// assert_eq!(doc, json!({"foo": ["qux", "baz"]}));
    /// ```
    pub fn set(&self, document: &mut Value, value: Value) -> Result<(), ResolutionError> {
        *resolve_mut(document, &self.reference_tokens)? = value;
        Ok(())
    }
}

impl FromStr for JsonPointer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JsonPointer::parse(s)
    }
}

/// Canonical re-serialization: each token is re-escaped independently and
/// joined with `/`. A pure projection; formatting never mutates the pointer.
impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_fragment {
            f.write_str("#")?;
        }
        for token in &self.reference_tokens {
            write!(f, "/{}", escape_reference_token(token))?;
        }
        Ok(())
    }
}
