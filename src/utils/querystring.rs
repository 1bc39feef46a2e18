// src/utils/querystring.rs

//! `application/x-www-form-urlencoded`-style query strings.

use crate::models::{QueryMap, QueryValue};

use super::{decode_component, encode_component};

/// Decode a query string (without the leading `?`) into a map.
///
/// Pairs are separated by `&`; the first `=` separates key from value and a
/// pair without `=` has an empty value. `+` decodes to a space. Repeated keys
/// collect their values in order.
///
/// # Examples
/// ```
/// use navurl::models::QueryValue;
/// use navurl::utils::querystring;
///
/// let map = querystring::parse("q=rust+url&tag=a&tag=b");
/// assert_eq!(map.get("q"), Some(&QueryValue::Single("rust url".to_string())));
/// assert_eq!(map.get("tag").map(|v| v.values()), Some(vec!["a", "b"]));
/// ```
pub fn parse(qs: &str) -> QueryMap {
    let mut map = QueryMap::new();
    for pair in qs.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        map.append(decode(key), decode(value));
    }
    map
}

/// Encode a map as `key=value` pairs joined by `&`.
///
/// Multi-valued keys are repeated once per value.
pub fn stringify(map: &QueryMap) -> String {
    let mut fields = Vec::with_capacity(map.len());
    for (key, value) in map.iter() {
        let prefix = format!("{}=", encode_component(key));
        match value {
            QueryValue::Single(v) => fields.push(format!("{prefix}{}", encode_component(v))),
            QueryValue::Multiple(vs) => fields.extend(
                vs.iter()
                    .map(|v| format!("{prefix}{}", encode_component(v))),
            ),
        }
    }
    fields.join("&")
}

fn decode(s: &str) -> String {
    decode_component(&s.replace('+', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duplicates_become_list() {
        let map = parse("a=1&a=2&b");
        assert_eq!(map.get("a").map(|v| v.values()), Some(vec!["1", "2"]));
        assert_eq!(map.get("b"), Some(&QueryValue::Single(String::new())));
    }

    #[test]
    fn test_parse_skips_empty_pairs() {
        let map = parse("&&x=1&");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_parse_keeps_malformed_escapes() {
        let map = parse("p=100%&q=%E4%BD%A0");
        assert_eq!(map.get("p"), Some(&QueryValue::Single("100%".to_string())));
        assert_eq!(map.get("q"), Some(&QueryValue::Single("你".to_string())));
    }

    #[test]
    fn test_parse_value_with_equals() {
        let map = parse("expr=a=b");
        assert_eq!(map.get("expr"), Some(&QueryValue::Single("a=b".to_string())));
    }

    #[test]
    fn test_stringify_repeats_keys() {
        let mut map = QueryMap::new();
        map.append("a", "1");
        map.append("a", "2");
        map.append("msg", "hello world&more");
        assert_eq!(stringify(&map), "a=1&a=2&msg=hello%20world%26more");
    }

    #[test]
    fn test_stringify_empty_map() {
        assert_eq!(stringify(&QueryMap::new()), "");
    }
}
