//! URL encoding helpers.
//!
//! Keys are arbitrary UTF-8 and may contain characters that are unsafe in a
//! URL, so every key or prefix that ends up in a link or a query is encoded
//! here.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters left unescaped by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Same as [`COMPONENT`] but keeps path separators readable.
const PATH: &AsciiSet = &COMPONENT.remove(b'/');

/// Encode a single URL component, `/` included.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Encode a key or prefix, leaving `/` literal.
pub fn encode_path(value: &str) -> String {
    utf8_percent_encode(value, PATH).to_string()
}

/// Decode a percent-encoded value. Invalid UTF-8 is replaced, not rejected.
pub fn decode(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}
