//! [`UrlRecord`] to string serialization.

use crate::models::{Query, UrlRecord};
use crate::utils::{encode_component, querystring};

use super::tables::is_slashed;

/// Serialize a record.
///
/// `host` wins over `hostname`/`port`; a structured query is only used
/// when `search` is empty. `//` is emitted when the record has slashes, or
/// when it has a host and a hierarchical (or no) scheme.
///
/// # Examples
/// ```
/// use navurl::models::UrlRecord;
/// use navurl::resolver::format;
///
/// let record = UrlRecord {
///     protocol: Some("https".to_string()),
///     hostname: Some("example.com".to_string()),
///     port: Some("8443".to_string()),
///     pathname: Some("docs/a?b".to_string()),
///     hash: Some("top".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(format(&record), "https://example.com:8443/docs/a%3Fb#top");
/// ```
pub fn format(record: &UrlRecord) -> String {
    let mut auth = record.auth.clone().unwrap_or_default();
    if !auth.is_empty() {
        auth = encode_component(&auth).replacen("%3A", ":", 1);
        auth.push('@');
    }

    let mut protocol = record.protocol.clone().unwrap_or_default();
    let mut pathname = record.pathname.clone().unwrap_or_default();
    let mut hash = record.hash.clone().unwrap_or_default();

    let host = match (non_empty(&record.host), non_empty(&record.hostname)) {
        (Some(host), _) => Some(format!("{auth}{host}")),
        (None, Some(hostname)) => {
            let mut host = if hostname.contains(':') {
                format!("{auth}[{hostname}]")
            } else {
                format!("{auth}{hostname}")
            };
            if let Some(port) = non_empty(&record.port) {
                host.push(':');
                host.push_str(port);
            }
            Some(host)
        }
        (None, None) => None,
    };

    let query = match &record.query {
        Some(Query::Parsed(map)) if !map.is_empty() => querystring::stringify(map),
        _ => String::new(),
    };

    let mut search = match non_empty(&record.search) {
        Some(search) => search.to_string(),
        None if !query.is_empty() => format!("?{query}"),
        None => String::new(),
    };

    if !protocol.is_empty() && !protocol.ends_with(':') {
        protocol.push(':');
    }

    // only hierarchical schemes get // unless the record had it already
    let host = if record.slashes || ((protocol.is_empty() || is_slashed(&protocol)) && host.is_some())
    {
        if !pathname.is_empty() && !pathname.starts_with('/') {
            pathname.insert(0, '/');
        }
        format!("//{}", host.unwrap_or_default())
    } else {
        host.unwrap_or_default()
    };

    if !hash.is_empty() && !hash.starts_with('#') {
        hash.insert(0, '#');
    }
    if !search.is_empty() && !search.starts_with('?') {
        search.insert(0, '?');
    }

    let pathname = pathname.replace('?', "%3F").replace('#', "%23");
    let search = search.replace('#', "%23");

    format!("{protocol}{host}{pathname}{search}{hash}")
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
