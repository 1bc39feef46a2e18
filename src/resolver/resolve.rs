//! Reference resolution: "where do you land following `relative` from `base`?"

use crate::models::UrlRecord;
use crate::utils::path::normalize_segments;

use super::parse::parse;
use super::tables::{is_hostless, is_slashed};

/// A reference to resolve: either unparsed text or an existing record.
#[derive(Debug, Clone, Copy)]
pub enum Reference<'a> {
    Str(&'a str),
    Record(&'a UrlRecord),
}

impl<'a> From<&'a str> for Reference<'a> {
    fn from(s: &'a str) -> Self {
        Reference::Str(s)
    }
}

impl<'a> From<&'a String> for Reference<'a> {
    fn from(s: &'a String) -> Self {
        Reference::Str(s)
    }
}

impl<'a> From<&'a UrlRecord> for Reference<'a> {
    fn from(record: &'a UrlRecord) -> Self {
        Reference::Record(record)
    }
}

impl Reference<'_> {
    /// Strings are parsed with `//` denoting a host, as a browser would.
    fn into_record(self) -> UrlRecord {
        match self {
            Reference::Str(s) => parse(s, false, true),
            Reference::Record(record) => record.clone(),
        }
    }
}

/// Resolve `relative` against the URL string `base`.
///
/// # Examples
/// ```
/// use navurl::resolver::resolve;
///
/// assert_eq!(resolve("http://example.com/a/b/", "../c"), "http://example.com/a/c");
/// assert_eq!(resolve("https://a.com/p", "//b.com/q"), "https://b.com/q");
/// assert_eq!(resolve("http://a.com/page", "#frag"), "http://a.com/page#frag");
/// ```
pub fn resolve(base: &str, relative: &str) -> String {
    parse(base, false, true).resolve(relative)
}

/// Resolve a reference against a base record, producing a new record.
///
/// The base is never modified.
pub fn resolve_object<'a>(base: &UrlRecord, relative: impl Into<Reference<'a>>) -> UrlRecord {
    let mut relative = relative.into().into_record();

    let mut result = base.clone();
    // the fragment always comes from the reference, even an empty one
    result.hash = relative.hash.clone();

    if relative.href.is_empty() {
        result.sync_href();
        return result;
    }

    // //host/path keeps only the scheme of the base
    if relative.slashes && !present(&relative.protocol) {
        let protocol = result.protocol.take();
        result = relative;
        result.protocol = protocol;

        if result.protocol.as_deref().is_some_and(is_slashed)
            && present(&result.hostname)
            && !present(&result.pathname)
        {
            result.pathname = Some("/".to_string());
            result.path = Some("/".to_string());
        }
        result.sync_href();
        return result;
    }

    if present(&relative.protocol) && relative.protocol != result.protocol {
        let rel_protocol = relative.protocol.clone().unwrap_or_default();

        // a non-hierarchical scheme discards everything from the base
        if !is_slashed(&rel_protocol) {
            relative.sync_href();
            return relative;
        }

        result.protocol = relative.protocol.clone();
        if !present(&relative.host) && !is_hostless(&rel_protocol) {
            // http:host/path: the first segment becomes the host
            let mut rel_path: Vec<String> = relative
                .pathname
                .as_deref()
                .unwrap_or("")
                .split('/')
                .map(str::to_string)
                .collect();
            let mut host = String::new();
            while !rel_path.is_empty() {
                let segment = rel_path.remove(0);
                if !segment.is_empty() {
                    host = segment;
                    break;
                }
            }
            relative.host = Some(host);
            if !present(&relative.hostname) {
                relative.hostname = Some(String::new());
            }
            if rel_path.first().map(String::as_str) != Some("") {
                rel_path.insert(0, String::new());
            }
            if rel_path.len() < 2 {
                rel_path.insert(0, String::new());
            }
            result.pathname = Some(rel_path.join("/"));
        } else {
            result.pathname = relative.pathname.clone();
        }

        result.search = relative.search.clone();
        result.query = relative.query.clone();
        result.host = Some(relative.host.clone().unwrap_or_default());
        result.auth = relative.auth.clone();
        result.hostname = if present(&relative.hostname) {
            relative.hostname.clone()
        } else {
            relative.host.clone()
        };
        result.port = relative.port.clone();
        result.sync_path();
        result.slashes = result.slashes || relative.slashes;
        result.sync_href();
        return result;
    }

    let is_source_abs = starts_with_slash(&result.pathname);
    let is_rel_abs = present(&relative.host) || starts_with_slash(&relative.pathname);
    let mut must_end_abs =
        is_rel_abs || is_source_abs || (present(&result.host) && present(&relative.pathname));
    let remove_all_dots = must_end_abs;
    let mut src_path = segments(&result.pathname);
    let mut rel_path = segments(&relative.pathname);

    // Non-hierarchical base (mailto:, news:, ...): fold the host into the
    // first path segment so ../ can climb into it, and unfold it afterwards.
    let psychotic = result.protocol.as_deref().is_some_and(|p| !p.is_empty() && !is_slashed(p));
    if psychotic {
        result.hostname = Some(String::new());
        result.port = None;
        if let Some(host) = result.host.take().filter(|h| !h.is_empty()) {
            fold_host(&mut src_path, host);
        }
        result.host = Some(String::new());
        if present(&relative.protocol) {
            relative.hostname = None;
            relative.port = None;
            if let Some(host) = relative.host.take().filter(|h| !h.is_empty()) {
                fold_host(&mut rel_path, host);
            }
        }
        must_end_abs = must_end_abs && (first_is_empty(&rel_path) || first_is_empty(&src_path));
    }

    if is_rel_abs {
        if relative.host.is_some() {
            result.host = relative.host.clone();
        }
        if relative.hostname.is_some() {
            result.hostname = relative.hostname.clone();
        }
        result.search = relative.search.clone();
        result.query = relative.query.clone();
        src_path = rel_path;
    } else if !rel_path.is_empty() {
        // drop the base's file name, keep its directory
        src_path.pop();
        src_path.extend(rel_path);
        result.search = relative.search.clone();
        result.query = relative.query.clone();
    } else if relative.search.is_some() {
        // ?query only
        if psychotic {
            let host = (!src_path.is_empty()).then(|| src_path.remove(0));
            result.host = host.clone();
            result.hostname = host;
            split_auth_from_host(&mut result);
        }
        result.search = relative.search.clone();
        result.query = relative.query.clone();
        if result.pathname.is_some() || result.search.is_some() {
            result.path = Some(format!(
                "{}{}",
                result.pathname.as_deref().unwrap_or(""),
                result.search.as_deref().unwrap_or("")
            ));
        }
        result.sync_href();
        return result;
    }

    if src_path.is_empty() {
        result.pathname = None;
        result.path = result
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| format!("/{s}"));
        result.sync_href();
        return result;
    }

    // a path ending in ., .. or / keeps a trailing slash
    let last = src_path.last().map(String::as_str).unwrap_or("");
    let has_trailing_slash = ((present(&result.host)
        || present(&relative.host)
        || src_path.len() > 1)
        && (last == "." || last == ".."))
        || last.is_empty();

    let allow_above_root = !must_end_abs && !remove_all_dots;
    let mut src_path: Vec<String> = {
        let parts: Vec<&str> = src_path.iter().map(String::as_str).collect();
        normalize_segments(&parts, allow_above_root)
            .into_iter()
            .map(str::to_string)
            .collect()
    };

    if must_end_abs && !first_is_empty(&src_path) && !first_starts_with_slash(&src_path) {
        src_path.insert(0, String::new());
    }

    if has_trailing_slash && !src_path.join("/").ends_with('/') {
        src_path.push(String::new());
    }

    let is_absolute = first_is_empty(&src_path) || first_starts_with_slash(&src_path);

    if psychotic {
        let host = if is_absolute || src_path.is_empty() {
            String::new()
        } else {
            src_path.remove(0)
        };
        result.host = Some(host.clone());
        result.hostname = Some(host);
        split_auth_from_host(&mut result);
    }

    must_end_abs = must_end_abs || (present(&result.host) && !src_path.is_empty());

    if must_end_abs && !is_absolute {
        src_path.insert(0, String::new());
    }

    if src_path.is_empty() {
        result.pathname = None;
        result.path = None;
    } else {
        result.pathname = Some(src_path.join("/"));
    }

    if result.pathname.is_some() || result.search.is_some() {
        result.path = Some(format!(
            "{}{}",
            result.pathname.as_deref().unwrap_or(""),
            result.search.as_deref().unwrap_or("")
        ));
    }
    if present(&relative.auth) {
        result.auth = relative.auth.clone();
    }
    result.slashes = result.slashes || relative.slashes;
    result.sync_href();
    result
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}

fn starts_with_slash(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| s.starts_with('/'))
}

fn segments(pathname: &Option<String>) -> Vec<String> {
    match pathname.as_deref() {
        Some(p) if !p.is_empty() => p.split('/').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

fn first_is_empty(path: &[String]) -> bool {
    path.first().is_some_and(|s| s.is_empty())
}

fn first_starts_with_slash(path: &[String]) -> bool {
    path.first().is_some_and(|s| s.starts_with('/'))
}

fn fold_host(path: &mut Vec<String>, host: String) {
    match path.first_mut() {
        Some(first) if first.is_empty() => *first = host,
        _ => path.insert(0, host),
    }
}

/// `local@domain` that ended up in the host goes back to auth + host.
fn split_auth_from_host(result: &mut UrlRecord) {
    let Some(host) = result.host.clone() else {
        return;
    };
    if host.find('@').is_some_and(|i| i > 0) {
        let mut parts = host.split('@');
        result.auth = parts.next().map(str::to_string);
        let host = parts.next().map(str::to_string);
        result.host = host.clone();
        result.hostname = host;
    }
}
