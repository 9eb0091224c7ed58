//! Preview image generation across a content tree.
//!
//! Finds every page root (`index.md` or `_index.md`) below the content root
//! and writes `<folder>/<folder-name>-image.svg` beside it:
//!
//! ```text
//! content/
//! ├── _index.md             → content/content-image.svg
//! └── blog/
//!     ├── _index.md         → blog/blog-image.svg
//!     └── first-post/
//!         └── index.md      → first-post/first-post-image.svg
//! ```
//!
//! Pages without frontmatter are skipped. Generation is deterministic, so
//! re-running overwrites previous output with identical files.

use super::compose::{ImageSpec, compose_svg};
use super::frontmatter::{Frontmatter, FrontmatterReader};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum SvgError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to walk content directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Canvas settings shared by every generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgStyle {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub foreground: String,
}

/// Per-page outcome, reported as it happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvgEvent {
    /// An image was written. Path is relative to the content root.
    Wrote(PathBuf),
    /// The page had no usable frontmatter. Path is relative to the content root.
    Skipped(PathBuf),
}

/// Summary of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgReport {
    /// Page files considered.
    pub pages: usize,
    /// Images written.
    pub written: usize,
}

/// Generate preview images for every page root under `content_root`.
///
/// `on_event` is called once per page, in sorted path order. Any write
/// failure aborts the run.
pub fn generate_images(
    content_root: &Path,
    style: &SvgStyle,
    reader: &FrontmatterReader,
    mut on_event: impl FnMut(&SvgEvent),
) -> Result<SvgReport, SvgError> {
    let pages = page_roots(content_root)?;
    let mut report = SvgReport {
        pages: pages.len(),
        written: 0,
    };

    for md in &pages {
        let fm = reader.read(md);
        let event = match image_spec(&fm, style) {
            Some(spec) => {
                let out = output_path(md);
                if let Some(parent) = out.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&out, compose_svg(&spec))?;
                report.written += 1;
                SvgEvent::Wrote(relative_to(&out, content_root))
            }
            None => SvgEvent::Skipped(relative_to(md, content_root)),
        };
        on_event(&event);
    }

    Ok(report)
}

/// All `index.md` and `_index.md` files below `root`, deduplicated and sorted.
fn page_roots(root: &Path) -> Result<BTreeSet<PathBuf>, SvgError> {
    let mut pages = BTreeSet::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        let name = entry.file_name();
        if entry.file_type().is_file() && (name == "index.md" || name == "_index.md") {
            pages.insert(entry.into_path());
        }
    }
    Ok(pages)
}

/// Build the image spec for a page, or `None` when it has no frontmatter.
///
/// Title is `title`; description is the first non-blank of `description`
/// and `summary`.
fn image_spec(fm: &Frontmatter, style: &SvgStyle) -> Option<ImageSpec> {
    if fm.is_empty() {
        return None;
    }
    let title = fm.get_str("title").unwrap_or_default().trim().to_string();
    let description = resolve(&[
        fm.get_str("description").as_deref(),
        fm.get_str("summary").as_deref(),
    ])
    .unwrap_or_default();

    Some(ImageSpec {
        width: style.width,
        height: style.height,
        background: style.background.clone(),
        foreground: style.foreground.clone(),
        title,
        description,
    })
}

/// First non-empty trimmed value, in priority order.
fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

/// `<folder>/<folder-name>-image.svg` for a page file inside `<folder>`.
pub fn output_path(md: &Path) -> PathBuf {
    let folder = md.parent().unwrap_or_else(|| Path::new(""));
    let name = folder
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    folder.join(format!("{name}-image.svg"))
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
