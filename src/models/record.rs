//! The decomposed URL record and its query representations.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A URL split into its components.
///
/// `None` means the component is absent; `Some(String::new())` means it is
/// present but empty. Several resolution rules depend on that difference
/// (an empty hostname still marks an authority, an empty search still
/// replaces the base query).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// Scheme including the trailing colon, lower-cased (`"https:"`)
    #[serde(default)]
    pub protocol: Option<String>,

    /// Whether the authority was introduced by `//`
    #[serde(default)]
    pub slashes: bool,

    /// Decoded user-info preceding `@`
    #[serde(default)]
    pub auth: Option<String>,

    /// `hostname[:port]`
    #[serde(default)]
    pub host: Option<String>,

    /// Lower-cased, ASCII-compatible host name without port or brackets
    #[serde(default)]
    pub hostname: Option<String>,

    /// Port digits without the colon
    #[serde(default)]
    pub port: Option<String>,

    #[serde(default)]
    pub pathname: Option<String>,

    /// Query string including the leading `?`
    #[serde(default)]
    pub search: Option<String>,

    #[serde(default)]
    pub query: Option<Query>,

    /// Fragment including the leading `#`
    #[serde(default)]
    pub hash: Option<String>,

    /// `pathname + search`
    #[serde(default)]
    pub path: Option<String>,

    /// Serialized form, kept in sync by parse and resolve
    #[serde(default)]
    pub href: String,
}

impl UrlRecord {
    /// Parse a URL string. See [`crate::resolver::parse`].
    pub fn parse(input: &str, parse_query: bool, slashes_denote_host: bool) -> Self {
        crate::resolver::parse(input, parse_query, slashes_denote_host)
    }

    /// Serialize the record. See [`crate::resolver::format`].
    pub fn format(&self) -> String {
        crate::resolver::format(self)
    }

    /// Resolve `relative` against this record and serialize the result.
    pub fn resolve(&self, relative: &str) -> String {
        self.resolve_object(relative).format()
    }

    /// Resolve a reference against this record.
    /// See [`crate::resolver::resolve_object`].
    pub fn resolve_object<'a>(&self, relative: impl Into<crate::resolver::Reference<'a>>) -> Self {
        crate::resolver::resolve_object(self, relative)
    }

    /// Recompute `path` from `pathname` and `search` when either is non-empty.
    pub(crate) fn sync_path(&mut self) {
        let pathname = self.pathname.as_deref().unwrap_or("");
        let search = self.search.as_deref().unwrap_or("");
        if !pathname.is_empty() || !search.is_empty() {
            self.path = Some(format!("{pathname}{search}"));
        }
    }

    /// Recompute `href` from the other fields.
    pub(crate) fn sync_href(&mut self) {
        self.href = crate::resolver::format(self);
    }
}

impl fmt::Display for UrlRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// The query component of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Query {
    /// Raw query text without the leading `?`
    Raw(String),
    /// Decoded key/value pairs
    Parsed(QueryMap),
}

impl Query {
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Query::Raw(raw) => Some(raw),
            Query::Parsed(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&QueryMap> {
        match self {
            Query::Parsed(map) => Some(map),
            Query::Raw(_) => None,
        }
    }
}

/// A value in a parsed query; repeated keys collect into `Multiple`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Single(String),
    Multiple(Vec<String>),
}

impl QueryValue {
    /// All values in order of appearance.
    pub fn values(&self) -> Vec<&str> {
        match self {
            QueryValue::Single(v) => vec![v.as_str()],
            QueryValue::Multiple(vs) => vs.iter().map(String::as_str).collect(),
        }
    }
}

/// Insertion-ordered mapping from query keys to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    entries: Vec<(String, QueryValue)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Add a value; a repeated key turns its entry into a list.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => match slot {
                QueryValue::Single(first) => {
                    let first = std::mem::take(first);
                    *slot = QueryValue::Multiple(vec![first, value]);
                }
                QueryValue::Multiple(values) => values.push(value),
            },
            None => self.entries.push((key, QueryValue::Single(value))),
        }
    }

    /// Replace whatever the key held.
    pub fn insert(&mut self, key: impl Into<String>, value: QueryValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }
}

impl Serialize for QueryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for QueryMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct QueryMapVisitor;

        impl<'de> Visitor<'de> for QueryMapVisitor {
            type Value = QueryMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of query keys to a string or list of strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<QueryMap, A::Error> {
                let mut map = QueryMap::new();
                while let Some((key, value)) = access.next_entry::<String, QueryValue>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(QueryMapVisitor)
    }
}
