//! Dialect-independent literal helpers.
//!
//! All helpers append to a caller-owned buffer so large statements are
//! composed without intermediate strings.

/// The SQL NULL literal.
pub const NULL: &str = "NULL";

/// Appends the NULL literal.
pub fn append_null(buf: &mut String) {
    buf.push_str(NULL);
}

/// Appends `s` wrapped in `quote`, doubling every embedded `quote`.
pub fn append_quoted(buf: &mut String, s: &str, quote: char) {
    buf.reserve(s.len() + 2);
    buf.push(quote);
    for c in s.chars() {
        if c == quote {
            buf.push(quote);
        }
        buf.push(c);
    }
    buf.push(quote);
}
