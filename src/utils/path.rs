// src/utils/path.rs

//! POSIX path helpers used when computing site-relative locations.

/// Directory portion of a `/`-separated path.
///
/// # Examples
/// ```
/// use navurl::utils::path::dirname;
///
/// assert_eq!(dirname("/book/chapter/index.html"), "/book/chapter");
/// assert_eq!(dirname("/a/b/"), "/a");
/// assert_eq!(dirname("file"), ".");
/// ```
pub fn dirname(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let bytes = path.as_bytes();
    let has_root = bytes[0] == b'/';

    let mut end = None;
    let mut matched_slash = true;
    for i in (1..bytes.len()).rev() {
        if bytes[i] == b'/' {
            if !matched_slash {
                end = Some(i);
                break;
            }
        } else {
            // first non-separator from the end
            matched_slash = false;
        }
    }

    match end {
        None if has_root => "/",
        None => ".",
        Some(1) if has_root => "/",
        Some(end) => &path[..end],
    }
}

/// Remove `.` segments and fold `..` into the preceding segment.
///
/// A single backward pass with a pending-`..` counter. When
/// `allow_above_root` is set, unmatched `..` segments are kept at the front.
pub fn normalize_segments<'a>(parts: &[&'a str], allow_above_root: bool) -> Vec<&'a str> {
    let mut parts = parts.to_vec();
    let mut up = 0usize;
    for i in (0..parts.len()).rev() {
        match parts[i] {
            "." => {
                parts.remove(i);
            }
            ".." => {
                parts.remove(i);
                up += 1;
            }
            _ if up > 0 => {
                parts.remove(i);
                up -= 1;
            }
            _ => {}
        }
    }

    if allow_above_root {
        for _ in 0..up {
            parts.insert(0, "..");
        }
    }
    parts
}

/// Join path segments right to left until one is absolute, then normalize.
///
/// The working directory used when no segment is absolute is `/`.
///
/// # Examples
/// ```
/// use navurl::utils::path::resolve;
///
/// assert_eq!(resolve(&["/a/b", "../c"]), "/a/c");
/// assert_eq!(resolve(&["/a", "/b", "c/"]), "/b/c");
/// ```
pub fn resolve(segments: &[&str]) -> String {
    let mut resolved = String::new();
    let mut absolute = false;

    for path in segments.iter().rev().copied().chain(std::iter::once("/")) {
        if absolute {
            break;
        }
        if path.is_empty() {
            continue;
        }
        resolved = format!("{path}/{resolved}");
        absolute = path.starts_with('/');
    }

    let parts: Vec<&str> = resolved.split('/').filter(|p| !p.is_empty()).collect();
    let normalized = normalize_segments(&parts, !absolute).join("/");

    let out = if absolute {
        format!("/{normalized}")
    } else {
        normalized
    };
    if out.is_empty() { ".".to_string() } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirname_edge_cases() {
        assert_eq!(dirname(""), ".");
        assert_eq!(dirname("/"), "/");
        assert_eq!(dirname("/a"), "/");
        assert_eq!(dirname("a/b"), "a");
        assert_eq!(dirname("//a"), "/");
    }

    #[test]
    fn test_normalize_collapses_chains() {
        assert_eq!(normalize_segments(&["a", "b", "..", "..", "c"], false), vec!["c"]);
        assert_eq!(normalize_segments(&["a", ".", "b"], false), vec!["a", "b"]);
    }

    #[test]
    fn test_normalize_above_root() {
        assert_eq!(normalize_segments(&["..", "..", "a"], true), vec!["..", "..", "a"]);
        assert_eq!(normalize_segments(&["..", "..", "a"], false), vec!["a"]);
    }

    #[test]
    fn test_resolve_relative_uses_root() {
        assert_eq!(resolve(&["docs", "intro.md"]), "/docs/intro.md");
    }

    #[test]
    fn test_resolve_cannot_escape_root() {
        assert_eq!(resolve(&["/a", "../../../b"]), "/b");
    }

    #[test]
    fn test_resolve_empty_segments() {
        assert_eq!(resolve(&[]), "/");
        assert_eq!(resolve(&["", ""]), "/");
    }
}
