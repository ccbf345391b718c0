//! JSON Pointer (RFC 6901).
//!
//! This crate implements [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901):
//! parsing pointer strings into reference tokens, resolving them against an
//! already-decoded [`serde_json::Value`] document, and overwriting the
//! addressed value in place. The URI-fragment form (`#/a/b`) is supported.
//!
//! # Example
//!
//! ```
//! use jsonpointer::{JsonPointer, NodeKind};
//! use serde_json::json;
//!
//! let mut doc = json!({"foo": ["bar", "baz"]});
//!
//! // Parse a pointer once, reuse it for reads and writes
//! let pointer = JsonPointer::parse("/foo/1").unwrap();
//!
//! let (value, kind) = pointer.get(&doc).unwrap();
//! assert_eq!(value, &json!("baz"));
//! assert_eq!(kind, NodeKind::String);
//!
//! pointer.set(&mut doc, json!("qux")).unwrap();
//! assert_eq!(doc, json!({"foo": ["bar", "qux"]}));
//!
//! // Serialization re-escapes tokens
//! let escaped = JsonPointer::parse("/a~1b").unwrap();
//! assert_eq!(escaped.reference_tokens(), &["a/b".to_string()]);
//! assert_eq!(escaped.to_string(), "/a~1b");
//! ```

pub mod error;
pub mod escape;
pub mod pointer;
pub mod resolve;

pub use error::{ParseError, ResolutionError};
pub use escape::{escape_reference_token, unescape_reference_token};
pub use pointer::JsonPointer;
pub use resolve::NodeKind;
