//! Utility functions and helpers.

pub mod path;
pub mod querystring;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Everything but the unreserved marks `-_.!~*'()` is escaped in a component.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URL component.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Percent-decode a URL component.
///
/// Malformed escapes are kept literally and invalid UTF-8 is replaced, so
/// this never fails.
pub fn decode_component(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Bytes whose escapes [`decode_uri`] leaves encoded.
const URI_RESERVED: &[u8] = b";/?:@&=+$,#";

/// Percent-decode a whole URI, keeping escapes of reserved characters.
///
/// `%2F` stays `%2F` so that an encoded slash never compares equal to a
/// path separator. Other escapes are decoded like [`decode_component`].
///
/// # Examples
/// ```
/// use navurl::utils::decode_uri;
///
/// assert_eq!(decode_uri("/caf%C3%A9/a%2Fb%3Fc"), "/café/a%2Fb%3Fc");
/// ```
pub fn decode_uri(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut start = 0;
    let mut i = 0;
    while i + 2 < bytes.len() {
        let reserved = bytes[i] == b'%'
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
            && u8::from_str_radix(&s[i + 1..i + 3], 16)
                .is_ok_and(|b| URI_RESERVED.contains(&b));
        if reserved {
            out.push_str(&decode_component(&s[start..i]));
            out.push_str(&s[i..i + 3]);
            i += 3;
            start = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&decode_component(&s[start..]));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_uri_keeps_reserved_escapes() {
        assert_eq!(decode_uri("/a%2Fb"), "/a%2Fb");
        assert_eq!(decode_uri("/a%2fb%3F%23"), "/a%2fb%3F%23");
        assert_eq!(decode_uri("%3B%3A%40%26%3D%2B%24%2C"), "%3B%3A%40%26%3D%2B%24%2C");
        assert_eq!(decode_uri("/a%20b%2Fc%20d"), "/a b%2Fc d");
        assert_eq!(decode_uri("/caf%C3%A9%2F"), "/café%2F");
        assert_eq!(decode_uri("100%"), "100%");
        assert_eq!(decode_uri("%zz%2"), "%zz%2");
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("user:pa ss"), "user%3Apa%20ss");
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
        assert_eq!(encode_component("ü"), "%C3%BC");
    }

    #[test]
    fn test_decode_component_lossy() {
        assert_eq!(decode_component("a%20b"), "a b");
        assert_eq!(decode_component("%zz"), "%zz");
        assert_eq!(decode_component("%FF"), "\u{FFFD}");
    }
}
