//! Internal link resolution against the leaf-bundle convention.
//!
//! A page is a folder holding `index.md` (leaf bundle) or `_index.md` (section),
//! addressed by a clean URL without extension. Resolution rules, applied in
//! order, each able to short-circuit to "exists":
//!
//! | Link shape | Verdict |
//! |---|---|
//! | `#anchor`, or empty once the fragment is gone | valid |
//! | scheme other than `file` (`https:`, `mailto:`) | valid, not checked |
//! | empty once the query string is gone | valid |
//! | `/path.ext` | valid, assets are not checked |
//! | `/path` | `content/path/index.md` or `content/path/_index.md` exists |
//! | `path.ext` | the file exists next to the referencing file |
//! | `path` | `path/index.md` exists next to the referencing file |
//!
//! Absolute links with an extension are deliberately accepted without touching
//! the disk: they usually point into `static/` or an asset pipeline this
//! checker does not model, so missing assets there are not reported.

use super::{Link, path_extension, trim_trailing_slash};
use std::path::{Component, Path, PathBuf};

/// Filesystem context a link is resolved in.
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// The Hugo `content` directory. Absolute links resolve below it.
    pub content_root: PathBuf,
    /// The Hugo project root. Report paths are made relative to it.
    pub project_root: PathBuf,
}

impl ResolveContext {
    pub fn new(content_root: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
            project_root: project_root.into(),
        }
    }
}

/// Decide whether `link`, found in the markdown file `source`, points at
/// something that exists.
///
/// Never fails: a malformed link at worst resolves to `false`.
pub fn link_exists(link: &str, source: &Path, ctx: &ResolveContext) -> bool {
    let link = Link::new(link);

    if link.as_str().starts_with('#') || link.without_fragment().is_empty() {
        return true;
    }
    if link.is_external() {
        return true;
    }
    let path = link.path();
    if path.is_empty() {
        return true;
    }
    let path = trim_trailing_slash(path);

    if let Some(segment) = path.strip_prefix('/') {
        let segment = segment.trim_start_matches('/');
        if path_extension(segment).is_some() {
            return true;
        }
        let dir = ctx.content_root.join(segment);
        return dir.join("index.md").exists() || dir.join("_index.md").exists();
    }

    let base = source.parent().unwrap_or_else(|| Path::new(""));
    let target = normalize(&base.join(path));
    if path_extension(path).is_some() {
        target.exists()
    } else {
        target.join("index.md").exists()
    }
}

/// Lexically resolve `.` and `..` components.
///
/// `..` never climbs above a root or prefix component.
fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().collect()
}
