// src/navigation.rs

//! Link navigation decisions for a statically served book.
//!
//! Nothing here touches a browser. The functions only decide what a page
//! runtime should do with a clicked link and where the book root is.

use serde::Serialize;

use crate::models::NavigationConfig;
use crate::resolver::{parse, resolve};
use crate::utils::{decode_uri, path};

/// What to do with a followed link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NavigationDecision {
    /// Full page load of the link as written.
    Reload { href: String },
    /// Same page: optionally push `uri` onto history, then scroll to `hash`.
    ScrollTo {
        uri: String,
        hash: Option<String>,
        push: bool,
    },
    /// Different page: fetch `uri` and swap content in place.
    Fetch {
        uri: String,
        hash: Option<String>,
        push: bool,
    },
}

/// Tracks the last loaded URI between link clicks.
#[derive(Debug, Clone)]
pub struct Navigator {
    config: NavigationConfig,
    previous_uri: String,
}

impl Navigator {
    /// Start from the URI of the initially loaded page.
    pub fn new(config: NavigationConfig, initial_uri: impl Into<String>) -> Self {
        Self {
            config,
            previous_uri: initial_uri.into(),
        }
    }

    /// The URI the page content currently comes from.
    pub fn previous_uri(&self) -> &str {
        &self.previous_uri
    }

    /// Decide how to follow `relative`, clicked on the page at
    /// `location_pathname`.
    ///
    /// Only a [`NavigationDecision::Fetch`] moves the previous URI forward.
    ///
    /// # Examples
    /// ```
    /// use navurl::models::NavigationConfig;
    /// use navurl::navigation::{NavigationDecision, Navigator};
    ///
    /// let mut nav = Navigator::new(NavigationConfig::default(), "http://a.com/book/intro.html");
    /// let decision = nav.navigate("/book/intro.html", "setup.html", true);
    /// assert!(matches!(decision, NavigationDecision::Fetch { .. }));
    /// assert_eq!(nav.previous_uri(), "/book/setup.html");
    /// ```
    pub fn navigate(
        &mut self,
        location_pathname: &str,
        relative: &str,
        push: bool,
    ) -> NavigationDecision {
        let previous = parse(&self.previous_uri, false, false);
        let uri = resolve(location_pathname, relative);
        let target = parse(&uri, false, false);
        let hash = target.hash.clone();

        let external = target.hostname.as_deref().is_some_and(|h| !h.is_empty());
        if !self.config.push_state || external {
            log::debug!("Reloading for {relative:?} (external: {external})");
            return NavigationDecision::Reload {
                href: relative.to_string(),
            };
        }

        if target.pathname == previous.pathname {
            log::debug!("Same page {uri:?}, scrolling to {hash:?}");
            return NavigationDecision::ScrollTo { uri, hash, push };
        }

        log::debug!("Fetching {uri:?} (was {:?})", self.previous_uri);
        self.previous_uri = uri.clone();
        NavigationDecision::Fetch { uri, hash, push }
    }
}

/// Absolute URL of the book root, always ending in a single `/`.
///
/// `base_path` is the root relative to the current page, e.g. `..` for a
/// page one directory deep. A location ending in `/` is treated as its
/// `index_file`.
///
/// # Examples
/// ```
/// use navurl::navigation::site_root;
///
/// let root = site_root("https:", "docs.example.com", "/book/guide/setup.html", "..", "index.html");
/// assert_eq!(root, "https://docs.example.com/book/");
/// ```
pub fn site_root(
    protocol: &str,
    host: &str,
    location_pathname: &str,
    base_path: &str,
    index_file: &str,
) -> String {
    let page = match location_pathname.strip_suffix('/') {
        Some(dir) => format!("{dir}/{index_file}"),
        None => location_pathname.to_string(),
    };
    let resolved = path::resolve(&[&page, base_path]);
    let dir = path::dirname(&resolved);

    let scheme = protocol.strip_suffix(':').unwrap_or(protocol);
    let mut root = resolve(&format!("{scheme}://{host}"), dir);
    if !root.ends_with('/') {
        root.push('/');
    }
    root
}

/// Whether a table-of-contents link points at the page being shown.
///
/// The link's fragment is ignored. Both sides are compared after
/// [`decode_uri`], so an escaped `/` or `?` still tells pages apart.
pub fn is_current_page(location_pathname: &str, href: &str) -> bool {
    let href = href.split('#').next().unwrap_or("");
    let resolved = resolve(location_pathname, href);
    decode_uri(location_pathname) == decode_uri(&resolved)
}
