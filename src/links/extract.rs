//! Link target extraction from markdown content.

use regex::Regex;
use std::sync::LazyLock;

/// Inline markdown link: `[label](target)`. Also matches the bracketed part of
/// images (`![alt](src)`), which are checked the same way.
static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid markdown link regex"));

/// HTML anchor with a double-quoted `href`, other attributes allowed before it.
static HTML_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?\s+)?href="([^"]*)""#).expect("valid anchor regex")
});

/// Extract every link target referenced in `content`.
///
/// Markdown links come first, then HTML anchors; duplicates are kept and
/// empty targets dropped. Targets are returned verbatim, with no syntax checks.
pub fn extract_links(content: &str) -> Vec<&str> {
    let markdown = MARKDOWN_LINK
        .captures_iter(content)
        .filter_map(|caps| caps.get(2));
    let anchors = HTML_ANCHOR
        .captures_iter(content)
        .filter_map(|caps| caps.get(1));

    markdown
        .chain(anchors)
        .map(|m| m.as_str())
        .filter(|target| !target.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_links() {
        let content = "See [the post](/blog/post) and [docs](../docs/).";
        assert_eq!(extract_links(content), vec!["/blog/post", "../docs/"]);
    }

    #[test]
    fn html_anchor_links() {
        let content = r#"<a href="/about">About</a> <a class="btn" target="_blank" href="https://x.dev">X</a>"#;
        assert_eq!(extract_links(content), vec!["/about", "https://x.dev"]);
    }

    #[test]
    fn markdown_before_html_and_duplicates_kept() {
        let content = r#"<a href="/one">1</a> [two](/two) [again](/two)"#;
        assert_eq!(extract_links(content), vec!["/two", "/two", "/one"]);
    }

    #[test]
    fn empty_targets_are_dropped() {
        let content = r#"<a href="">nothing</a> [empty]() text"#;
        assert!(extract_links(content).is_empty());
    }

    #[test]
    fn empty_label_is_not_a_link() {
        assert!(extract_links("[](/nowhere)").is_empty());
    }

    #[test]
    fn image_syntax_yields_its_source() {
        assert_eq!(extract_links("![cat](cat.png)"), vec!["cat.png"]);
    }

    #[test]
    fn anchors_and_queries_are_kept_verbatim() {
        let content = "[a](#intro) [b](/search?q=rust#top)";
        assert_eq!(extract_links(content), vec!["#intro", "/search?q=rust#top"]);
    }

    #[test]
    fn text_without_links() {
        assert!(extract_links("# Title\n\nJust [brackets] and (parens).").is_empty());
    }
}
