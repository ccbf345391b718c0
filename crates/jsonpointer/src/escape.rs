//! Reference-token escaping per RFC 6901.

/// Unescapes a JSON Pointer reference token.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use jsonpointer::unescape_reference_token;
///
/// assert_eq!(unescape_reference_token("a~0b"), "a~b");
/// assert_eq!(unescape_reference_token("c~1d"), "c/d");
/// assert_eq!(unescape_reference_token("no-escapes"), "no-escapes");
/// ```
pub fn unescape_reference_token(token: &str) -> String {
    if !token.contains('~') {
        return token.to_string();
    }
    // Order matters: ~1 must be replaced before ~0, so "~01" decodes to "~1"
    token.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer reference token.
///
/// Per RFC 6901, `~` is replaced with `~0` and `/` is replaced with `~1`.
///
/// # Example
///
/// ```
/// use jsonpointer::escape_reference_token;
///
/// assert_eq!(escape_reference_token("a~b"), "a~0b");
/// assert_eq!(escape_reference_token("c/d"), "c~1d");
/// assert_eq!(escape_reference_token("no-escapes"), "no-escapes");
/// ```
pub fn escape_reference_token(token: &str) -> String {
    if !token.contains('/') && !token.contains('~') {
        return token.to_string();
    }
    // Order matters: ~ must be escaped before /
    token.replace('~', "~0").replace('/', "~1")
}
