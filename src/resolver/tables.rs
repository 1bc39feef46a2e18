//! Immutable lookup tables shared by the parser, resolver and formatter.

use std::sync::LazyLock;

use regex::Regex;

/// Leading `scheme:` token.
pub(crate) static PROTOCOL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9.+-]+:").expect("protocol pattern"));

/// Trailing `:digits` of a host.
pub(crate) static PORT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":[0-9]*$").expect("port pattern"));

/// Root-relative path with an optional query and nothing else.
///
/// Inputs starting with `///` must be rejected separately.
pub(crate) static SIMPLE_PATH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(//?[^?\s]*)(\?\S*)?$").expect("simple path pattern"));

/// `//user@host` with no scheme.
pub(crate) static USER_INFO_HOST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^//[^@/]+@[^@/]+").expect("user info pattern"));

/// Characters escaped in the post-authority part of a URL.
pub(crate) const AUTO_ESCAPE: &[char] = &[
    '\'', '{', '}', '|', '\\', '^', '`', '<', '>', '"', ' ', '\r', '\n', '\t',
];

/// Characters that end the authority when searching for the `@` separator.
pub(crate) const HOST_ENDING_CHARS: &[char] = &['/', '?', '#'];

/// Characters that cannot appear in a host.
pub(crate) const NON_HOST_CHARS: &[char] = &[
    '%', '/', '?', ';', '#', '\'', '{', '}', '|', '\\', '^', '`', '<', '>', '"', ' ', '\r', '\n',
    '\t',
];

pub(crate) const HOSTNAME_MAX_LEN: usize = 255;
pub(crate) const HOSTNAME_PART_MAX_LEN: usize = 63;

/// Schemes that conventionally carry `//` and a host.
const SLASHED_PROTOCOLS: &[&str] = &["http", "https", "ftp", "gopher", "file"];

/// Schemes that never have a host.
const HOSTLESS_PROTOCOLS: &[&str] = &["javascript"];

/// Schemes whose remainder is never auto-escaped.
const UNSAFE_PROTOCOLS: &[&str] = &["javascript"];

fn contains(set: &[&str], protocol: &str) -> bool {
    let name = protocol.strip_suffix(':').unwrap_or(protocol);
    set.contains(&name)
}

/// `http`, `https`, `ftp`, `gopher`, `file`, with or without the colon.
pub fn is_slashed(protocol: &str) -> bool {
    contains(SLASHED_PROTOCOLS, protocol)
}

/// `javascript`, with or without the colon.
pub fn is_hostless(protocol: &str) -> bool {
    contains(HOSTLESS_PROTOCOLS, protocol)
}

pub fn is_unsafe(protocol: &str) -> bool {
    contains(UNSAFE_PROTOCOLS, protocol)
}

/// Whether `c` may appear in a hostname label.
pub(crate) fn is_hostname_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '-')
}
