//! Content tree scan for broken internal links.
//!
//! Walks every `*.md` file under the content root (sorted, so reports are
//! stable), extracts its links, and resolves the internal ones. The scan is
//! fail-fast: a file that cannot be read or is not UTF-8 aborts the whole run
//! rather than producing a silently incomplete report.

use super::{Link, ResolveContext, extract_links, link_exists};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum LinkScanError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("File is not valid UTF-8: {0}")]
    NotUtf8(PathBuf),
    #[error("Failed to walk content directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Broken links per file.
///
/// Keys are file paths relative to the project root (content-relative when
/// the content root lies outside it). Only files with at least one broken link
/// appear; links keep their order of extraction.
pub type ScanResult = BTreeMap<String, Vec<String>>;

/// Scan every markdown file under `ctx.content_root` for broken internal links.
pub fn find_broken_links(ctx: &ResolveContext) -> Result<ScanResult, LinkScanError> {
    let mut broken = ScanResult::new();

    for md_file in markdown_files(&ctx.content_root)? {
        let content = read_utf8(&md_file)?;

        let file_broken: Vec<String> = extract_links(&content)
            .into_iter()
            .filter(|link| !Link::new(link).is_external())
            .filter(|link| !link_exists(link, &md_file, ctx))
            .map(String::from)
            .collect();

        if !file_broken.is_empty() {
            broken.insert(report_path(&md_file, ctx), file_broken);
        }
    }

    Ok(broken)
}

/// All `*.md` files below `root`, in sorted walk order.
fn markdown_files(root: &Path) -> Result<Vec<PathBuf>, LinkScanError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        let is_md = path
            .extension()
            .map(|e| e == "md")
            .unwrap_or(false);
        if entry.file_type().is_file() && is_md {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

fn read_utf8(path: &Path) -> Result<String, LinkScanError> {
    let bytes = fs::read(path).map_err(|source| LinkScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| LinkScanError::NotUtf8(path.to_path_buf()))
}

fn report_path(md_file: &Path, ctx: &ResolveContext) -> String {
    md_file
        .strip_prefix(&ctx.project_root)
        .or_else(|_| md_file.strip_prefix(&ctx.content_root))
        .unwrap_or(md_file)
        .to_string_lossy()
        .to_string()
}
