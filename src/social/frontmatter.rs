//! Frontmatter reading for markdown pages.
//!
//! A frontmatter block sits at the very top of the file (after an optional
//! BOM and blank lines), opened and closed by lines that are exactly `---`:
//!
//! ```text
//! ---
//! title: "Hello"
//! description: A short summary
//! ---
//! Body text...
//! ```
//!
//! Parsing goes through the [`FrontmatterParser`] trait. [`YamlParser`] is the
//! production parser; [`KeyValueParser`] understands only naive `key: value`
//! lines for a fixed key set and doubles as the YAML parser's fallback when the
//! block is not a YAML mapping. The parser is picked once, when the
//! [`FrontmatterReader`] is built.
//!
//! Reading never fails: a missing block, an unreadable file or unparseable
//! content all produce an empty [`Frontmatter`].

use crate::config::FrontmatterMode;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Keys the line-oriented parser recognizes.
pub const KNOWN_KEYS: &[&str] = &["title", "seoTitle", "description", "summary", "layout"];

/// Parsed frontmatter: top-level keys to YAML values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    fields: BTreeMap<String, Value>,
}

impl Frontmatter {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Scalar value of `key` rendered as a string.
    ///
    /// Strings come back as-is, numbers and booleans in their YAML spelling.
    /// Missing keys, nulls, sequences and mappings yield `None`.
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl FromIterator<(String, Value)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Turns the raw text between the `---` delimiters into [`Frontmatter`].
pub trait FrontmatterParser {
    /// Parse a frontmatter block. Returns an empty mapping on failure.
    fn parse(&self, raw: &str) -> Frontmatter;
}

/// Full YAML parser.
///
/// A top-level mapping becomes the frontmatter (non-string keys dropped); an
/// empty document is an empty mapping. Anything else (a scalar or list
/// document, or invalid YAML) is handed to [`KeyValueParser`].
#[derive(Debug, Default)]
pub struct YamlParser;

impl FrontmatterParser for YamlParser {
    fn parse(&self, raw: &str) -> Frontmatter {
        match serde_yaml::from_str::<Value>(raw) {
            Ok(Value::Mapping(map)) => map
                .into_iter()
                .filter_map(|(k, v)| match k {
                    Value::String(key) => Some((key, v)),
                    _ => None,
                })
                .collect(),
            Ok(Value::Null) => Frontmatter::default(),
            _ => KeyValueParser.parse(raw),
        }
    }
}

/// Naive line parser for [`KNOWN_KEYS`].
///
/// Splits each line on its first `:`, trims whitespace and then any
/// surrounding `"` and `'` characters from the value. Later lines win.
#[derive(Debug, Default)]
pub struct KeyValueParser;

impl FrontmatterParser for KeyValueParser {
    fn parse(&self, raw: &str) -> Frontmatter {
        raw.lines()
            .filter_map(|line| line.split_once(':'))
            .map(|(k, v)| (k.trim(), v.trim().trim_matches('"').trim_matches('\'')))
            .filter(|(k, _)| KNOWN_KEYS.contains(k))
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect()
    }
}

/// Reads frontmatter from markdown files with a parser chosen up front.
pub struct FrontmatterReader {
    parser: Box<dyn FrontmatterParser>,
}

impl FrontmatterReader {
    pub fn new(parser: Box<dyn FrontmatterParser>) -> Self {
        Self { parser }
    }

    pub fn for_mode(mode: FrontmatterMode) -> Self {
        match mode {
            FrontmatterMode::Yaml => Self::new(Box::new(YamlParser)),
            FrontmatterMode::KeyValue => Self::new(Box::new(KeyValueParser)),
        }
    }

    /// Read the frontmatter of the markdown file at `path`.
    pub fn read(&self, path: &Path) -> Frontmatter {
        std::fs::read_to_string(path)
            .ok()
            .map(|text| self.parse_document(&text))
            .unwrap_or_default()
    }

    /// Parse the frontmatter of a whole markdown document.
    pub fn parse_document(&self, text: &str) -> Frontmatter {
        extract_block(text)
            .map(|raw| self.parser.parse(&raw))
            .unwrap_or_default()
    }
}

impl Default for FrontmatterReader {
    fn default() -> Self {
        Self::for_mode(FrontmatterMode::default())
    }
}

/// The raw text between the opening and closing `---` lines, if both exist.
fn extract_block(text: &str) -> Option<String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines().skip_while(|line| line.trim().is_empty());

    if lines.next()?.trim_end() != "---" {
        return None;
    }

    let mut block = Vec::new();
    for line in lines {
        if line.trim_end() == "---" {
            return Some(block.join("\n"));
        }
        block.push(line);
    }
    None
}
