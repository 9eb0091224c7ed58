//! # hu
//!
//! Small utilities for Hugo sites built from leaf bundles, where every page is
//! a folder holding `index.md` (or `_index.md` for a section) plus its assets.
//!
//! # Two Independent Pipelines
//!
//! ```text
//! 404-links   content/**/*.md  →  extract links → resolve → broken links per file
//! svg         content/**/index.md, _index.md → frontmatter → <name>-image.svg
//! ```
//!
//! Both are single, sequential passes over the content tree. Neither keeps
//! state between runs: link checking is read-only and image generation
//! overwrites its own output with identical bytes given identical input.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`links`] | Link extraction, leaf-bundle resolution, and the broken link scan |
//! | [`social`] | Frontmatter reading, text wrapping, SVG composition, and image generation |
//! | [`config`] | Optional `hu.toml` loading and validation |
//! | [`output`] | CLI output formatting for both commands |
//!
//! # Design Decisions
//!
//! ## Assets Behind Absolute URLs Are Not Checked
//!
//! An absolute link with a file extension (`/images/cat.png`) usually points
//! into `static/` or a processed asset pipeline. The checker does not model
//! those, so such links are accepted as-is. This trades false negatives for
//! zero false positives on asset URLs.
//!
//! ## Maud For SVG
//!
//! Preview images are built with maud's compile-time markup macro rather than
//! string templates. Every interpolated title, description and color is
//! escaped, so no frontmatter content can produce a malformed document.

pub mod config;
pub mod links;
pub mod output;
pub mod social;

#[cfg(test)]
pub(crate) mod test_helpers;
