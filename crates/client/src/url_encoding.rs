//! Percent-encoding for route placeholder values.
//!
//! Every identifier substituted into a route template must stay a single
//! path segment. Without encoding, a value like `12/../users` would escape the
//! resource path and `1?x=y` would inject a query string.
//!
//! ```
//! use helpdesk_client::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("a/b"), "a%2Fb");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// RFC 3986 section 3.3 reserved and unsafe characters, plus `%` so values
/// that already contain escapes are not decoded twice.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// ```
/// use helpdesk_client::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("360001234"), "360001234");
/// assert_eq!(encode_path_segment("priority level"), "priority%20level");
/// assert_eq!(encode_path_segment("100%"), "100%25");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
