//! Document traversal: walking decoded reference tokens over a
//! [`serde_json::Value`] tree.

use serde_json::Value;

use crate::error::ResolutionError;

/// The runtime shape of a document node.
///
/// Reported alongside the resolved value by
/// [`JsonPointer::get`](crate::JsonPointer::get) so callers can branch on
/// shape without re-inspecting the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl NodeKind {
    /// Classify a document node.
    pub fn of(value: &Value) -> NodeKind {
        match value {
            Value::Null => NodeKind::Null,
            Value::Bool(_) => NodeKind::Bool,
            Value::Number(_) => NodeKind::Number,
            Value::String(_) => NodeKind::String,
            Value::Array(_) => NodeKind::Array,
            Value::Object(_) => NodeKind::Object,
        }
    }

    /// Whether this kind can be descended into (object or array).
    pub fn is_container(self) -> bool {
        matches!(self, NodeKind::Array | NodeKind::Object)
    }
}

/// Parse and bounds-check an array index token.
///
/// Accepts tokens made entirely of ASCII digits, plus the RFC 6901 `-`
/// token, which designates the member after the last element and therefore
/// always fails the bounds check here.
fn array_index(token: &str, length: usize) -> Result<usize, ResolutionError> {
    let index: usize = if token == "-" {
        length
    } else {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ResolutionError::InvalidIndex(token.to_string()));
        }
        token
            .parse()
            .map_err(|_| ResolutionError::InvalidIndex(token.to_string()))?
    };
    if index >= length {
        return Err(ResolutionError::IndexOutOfBounds { index, length });
    }
    Ok(index)
}

/// Walk `tokens` left to right from `document`, returning the final node.
///
/// The first failing step aborts the walk; there is no partial result.
pub(crate) fn resolve<'a>(
    document: &'a Value,
    tokens: &[String],
) -> Result<&'a Value, ResolutionError> {
    let mut current = document;
    for token in tokens {
        match current {
            Value::Object(map) => {
                current = map
                    .get(token)
                    .ok_or_else(|| ResolutionError::NoSuchKey(token.clone()))?;
            }
            Value::Array(arr) => {
                let index = array_index(token, arr.len())?;
                current = &arr[index];
            }
            _ => return Err(ResolutionError::NotTraversable(token.clone())),
        }
    }
    Ok(current)
}

/// Mutable twin of [`resolve`]. Identical step semantics; the returned
/// handle is how `set` overwrites the final token's target in place.
pub(crate) fn resolve_mut<'a>(
    document: &'a mut Value,
    tokens: &[String],
) -> Result<&'a mut Value, ResolutionError> {
    let mut current = document;
    for token in tokens {
        match current {
            Value::Object(map) => {
                current = map
                    .get_mut(token)
                    .ok_or_else(|| ResolutionError::NoSuchKey(token.clone()))?;
            }
            Value::Array(arr) => {
                let index = array_index(token, arr.len())?;
                current = &mut arr[index];
            }
            _ => return Err(ResolutionError::NotTraversable(token.clone())),
        }
    }
    Ok(current)
}
