//! CLI output formatting for both commands.
//!
//! # Output Format
//!
//! ## 404-links
//!
//! ```text
//! Scanning for broken links in content...
//!
//! ✗ Found broken links in 2 file(s):
//!
//! content/blog/post/index.md:
//!   - /blog/missing
//!   - ../gone/
//!
//! content/about/index.md:
//!   - /team
//!
//! ```
//!
//! or, on a clean tree, `✓ No broken links found!`.
//!
//! ## svg
//!
//! ```text
//!
//! === Generating SVGs from /site/content ===
//!   wrote blog/blog-image.svg
//!   skip drafts/index.md
//! Generated 1 SVG file(s)
//! ```
//!
//! # Architecture
//!
//! Each report has a `format_*` function returning [`Line`]s for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure;
//! color is applied only when printing, from each line's [`Tone`].

use crate::links::ScanResult;
use crate::social::{SvgEvent, SvgReport};
use colored::Colorize;
use std::fmt;
use std::path::Path;

/// How a line is highlighted on a color terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Failure,
    /// File headers in the broken link report.
    Heading,
}

/// One line of user-facing output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tone: Tone,
    pub text: String,
}

impl Line {
    fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self::new(Tone::Plain, text)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tone {
            Tone::Plain => write!(f, "{}", self.text),
            Tone::Success => write!(f, "{}", self.text.green()),
            Tone::Failure => write!(f, "{}", self.text.red()),
            Tone::Heading => write!(f, "{}", self.text.yellow()),
        }
    }
}

fn print_lines(lines: &[Line]) {
    for line in lines {
        println!("{line}");
    }
}

// ============================================================================
// 404-links
// ============================================================================

pub fn format_links_banner(content_dir: &Path) -> Line {
    Line::plain(format!(
        "Scanning for broken links in {}...",
        content_dir.display()
    ))
}

/// Format the broken link report: one header per file, one line per link.
pub fn format_links_report(result: &ScanResult) -> Vec<Line> {
    if result.is_empty() {
        return vec![Line::new(Tone::Success, "✓ No broken links found!")];
    }

    let mut lines = vec![Line::new(
        Tone::Failure,
        format!("\n✗ Found broken links in {} file(s):\n", result.len()),
    )];
    for (file, links) in result {
        lines.push(Line::new(Tone::Heading, format!("{file}:")));
        lines.extend(links.iter().map(|link| Line::plain(format!("  - {link}"))));
        lines.push(Line::plain(""));
    }
    lines
}

pub fn print_links_banner(content_dir: &Path) {
    println!("{}", format_links_banner(content_dir));
}

pub fn print_links_report(result: &ScanResult) {
    print_lines(&format_links_report(result));
}

// ============================================================================
// svg
// ============================================================================

pub fn format_svg_banner(content_dir: &Path) -> Line {
    Line::plain(format!(
        "\n=== Generating SVGs from {} ===",
        content_dir.display()
    ))
}

/// Format a single per-page outcome.
pub fn format_svg_event(event: &SvgEvent) -> Line {
    match event {
        SvgEvent::Wrote(path) => Line::plain(format!("  wrote {}", path.display())),
        SvgEvent::Skipped(path) => Line::plain(format!("  skip {}", path.display())),
    }
}

pub fn format_svg_summary(report: &SvgReport) -> Line {
    if report.pages == 0 {
        Line::plain("No markdown files (index.md/_index.md) found")
    } else {
        Line::new(
            Tone::Success,
            format!("Generated {} SVG file(s)", report.written),
        )
    }
}

pub fn print_svg_banner(content_dir: &Path) {
    println!("{}", format_svg_banner(content_dir));
}

pub fn print_svg_event(event: &SvgEvent) {
    println!("{}", format_svg_event(event));
}

pub fn print_svg_summary(report: &SvgReport) {
    println!("{}", format_svg_summary(report));
}

// ============================================================================
// Errors
// ============================================================================

/// Print a user-facing error to stderr.
pub fn print_error(message: impl fmt::Display) {
    eprintln!("{}: {}", "error".red().bold(), message);
}
