//! Hostname splitting, validation and ASCII-compatible encoding.

use super::tables::{HOSTNAME_PART_MAX_LEN, PORT_PATTERN, is_hostname_char};

/// Split `host` into hostname and port.
///
/// A bare trailing `:` is dropped without producing a port.
pub(crate) fn split_port(host: &str) -> (&str, Option<String>) {
    match PORT_PATTERN.find(host) {
        Some(m) => {
            let digits = &m.as_str()[1..];
            let port = (!digits.is_empty()).then(|| digits.to_string());
            (&host[..m.start()], port)
        }
        None => (host, None),
    }
}

/// Hostname that failed validation, split at the first bad label.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Truncated {
    /// Labels that passed, plus the valid prefix of the bad label
    pub hostname: String,
    /// Everything after that prefix, joined with `.`
    pub remainder: Option<String>,
}

/// Check each `.`-separated label against `[+a-zA-Z0-9_-]{0,63}`.
///
/// Non-ASCII characters count as valid placeholders (one per UTF-16 unit)
/// so that internationalized labels survive until IDNA encoding.
pub(crate) fn validate(hostname: &str) -> Option<Truncated> {
    let parts: Vec<&str> = hostname.split('.').collect();
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() || is_valid_part(part) {
            continue;
        }

        let mut valid = parts[..i].to_vec();
        let mut not_host: Vec<&str> = parts[i + 1..].to_vec();

        let prefix_len = part
            .chars()
            .take(HOSTNAME_PART_MAX_LEN)
            .take_while(|&c| is_hostname_char(c))
            .count();
        let (prefix, tail) = part.split_at(prefix_len);
        if !tail.contains(['\n', '\r', '\u{2028}', '\u{2029}']) {
            valid.push(prefix);
            not_host.insert(0, tail);
        }

        return Some(Truncated {
            hostname: valid.join("."),
            remainder: (!not_host.is_empty()).then(|| not_host.join(".")),
        });
    }
    None
}

fn is_valid_part(part: &str) -> bool {
    part.encode_utf16().count() <= HOSTNAME_PART_MAX_LEN
        && part.chars().all(|c| !c.is_ascii() || is_hostname_char(c))
}

/// Punycode-encode every label that contains characters outside
/// printable ASCII. Labels that are already ASCII pass through unchanged.
///
/// In `local@domain` form only the domain is encoded.
pub(crate) fn to_ascii(domain: &str) -> String {
    let mut pieces = domain.split('@');
    let first = pieces.next().unwrap_or("");
    let (local, domain) = match pieces.next() {
        Some(second) => (Some(first), second),
        None => (None, first),
    };

    let domain = domain.replace(['\u{3002}', '\u{FF0E}', '\u{FF61}'], ".");
    let encoded: Vec<String> = domain.split('.').map(encode_label).collect();
    let encoded = encoded.join(".");

    match local {
        Some(local) => format!("{local}@{encoded}"),
        None => encoded,
    }
}

fn encode_label(label: &str) -> String {
    if label.chars().all(|c| (' '..='~').contains(&c)) {
        return label.to_string();
    }
    match idna::punycode::encode_str(label) {
        Some(encoded) => format!("xn--{encoded}"),
        None => {
            log::debug!("Punycode encoding overflowed for label {label:?}; keeping it as is");
            label.to_string()
        }
    }
}
