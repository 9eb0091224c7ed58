//! Broken internal link checking.
//!
//! Hugo leaf bundles address pages by folder: `/blog/post` is the page whose
//! source lives at `content/blog/post/index.md` (or `_index.md` for a section).
//! This module checks that every internal link in the content tree points at
//! something that exists under that convention.
//!
//! The module is split into:
//! - **Extract**: pulls link targets out of markdown and inline HTML
//! - **Resolve**: decides whether a single link target exists on disk
//! - **Scan**: walks the content tree and collects broken links per file
//!
//! [`Link`] carries the derived attributes (fragment, query, scheme, extension)
//! that both the resolver and the scanner classify on.

mod extract;
mod resolve;
mod scan;

pub use extract::extract_links;
pub use resolve::{ResolveContext, link_exists};
pub use scan::{LinkScanError, ScanResult, find_broken_links};

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// URI scheme prefix: a letter followed by letters, digits, `+`, `-` or `.`.
static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*):").expect("valid scheme regex"));

/// A link target as written in content.
///
/// All attributes are derived from the raw string on demand; a `Link` has no
/// identity beyond its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<'a> {
    raw: &'a str,
}

impl<'a> Link<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn has_fragment(&self) -> bool {
        self.raw.contains('#')
    }

    pub fn has_query(&self) -> bool {
        self.without_fragment().contains('?')
    }

    /// Lowercased scheme, if the link has one (`https`, `mailto`, `file`, ...).
    pub fn scheme(&self) -> Option<String> {
        SCHEME
            .captures(self.without_fragment())
            .map(|caps| caps[1].to_ascii_lowercase())
    }

    /// External links carry a scheme other than `file`.
    pub fn is_external(&self) -> bool {
        self.scheme().is_some_and(|s| s != "file")
    }

    pub fn is_absolute(&self) -> bool {
        self.path().starts_with('/')
    }

    /// The link with everything from the first `#` removed.
    pub fn without_fragment(&self) -> &'a str {
        self.raw.split('#').next().unwrap_or_default()
    }

    /// The link with fragment and query string removed.
    pub fn path(&self) -> &'a str {
        self.without_fragment().split('?').next().unwrap_or_default()
    }

    /// Extension of the last path segment, if it has a non-empty one.
    pub fn extension(&self) -> Option<&'a str> {
        path_extension(trim_trailing_slash(self.path()))
    }
}

/// Remove trailing slashes from anything longer than the root path `/`.
pub(crate) fn trim_trailing_slash(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

/// Non-empty extension of the final component; dotfiles have none.
pub(crate) fn path_extension(path: &str) -> Option<&str> {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_and_query_are_stripped_for_path() {
        let link = Link::new("/blog/post/?page=2#comments");
        assert!(link.has_fragment());
        assert!(link.has_query());
        assert_eq!(link.path(), "/blog/post/");
        assert!(link.is_absolute());
    }

    #[test]
    fn query_after_fragment_is_not_a_query() {
        let link = Link::new("page#section?x=1");
        assert!(link.has_fragment());
        assert!(!link.has_query());
    }

    #[test]
    fn network_schemes_are_external() {
        assert!(Link::new("https://example.com").is_external());
        assert!(Link::new("mailto:someone@example.com").is_external());
        assert!(Link::new("HTTP://EXAMPLE.COM").is_external());
        assert_eq!(
            Link::new("HTTP://EXAMPLE.COM").scheme().as_deref(),
            Some("http")
        );
    }

    #[test]
    fn file_scheme_and_paths_are_internal() {
        assert!(!Link::new("file:///tmp/x.md").is_external());
        assert!(!Link::new("/blog/post").is_external());
        assert!(!Link::new("../sibling/").is_external());
        assert!(!Link::new("./a:b").is_external());
    }

    #[test]
    fn extension_detection() {
        assert_eq!(Link::new("/images/cat.png").extension(), Some("png"));
        assert_eq!(Link::new("notes.md#top").extension(), Some("md"));
        assert_eq!(Link::new("/blog/post/").extension(), None);
        assert_eq!(Link::new("../other").extension(), None);
        assert_eq!(Link::new("/.well-known").extension(), None);
        assert_eq!(Link::new("trailing.").extension(), None);
    }

    #[test]
    fn trailing_slash_keeps_root() {
        assert_eq!(trim_trailing_slash("/"), "/");
        assert_eq!(trim_trailing_slash("/blog/"), "/blog");
        assert_eq!(trim_trailing_slash("a//"), "a");
    }
}
