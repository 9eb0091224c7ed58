//! Shared test utilities for the hu test suite.
//!
//! [`ContentTree`] builds a throwaway Hugo project in a temp directory:
//!
//! ```rust
//! use crate::test_helpers::ContentTree;
//!
//! let tree = ContentTree::new()
//!     .page("blog/_index.md", "---\ntitle: Blog\n---\n")
//!     .page("blog/post/index.md", "[home](/)")
//!     .file("static/logo.png", "");
//!
//! let content = tree.content(); // <tmp>/content
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary Hugo project root with a `content/` directory inside.
///
/// The directory is removed when the tree is dropped.
pub struct ContentTree {
    tmp: TempDir,
}

impl ContentTree {
    pub fn new() -> Self {
        Self {
            tmp: TempDir::new().unwrap(),
        }
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    /// `<root>/content`, whether or not it exists yet.
    pub fn content(&self) -> PathBuf {
        self.root().join("content")
    }

    /// Write a markdown file at `rel` below the content directory.
    pub fn page(self, rel: &str, body: &str) -> Self {
        self.file(&format!("content/{rel}"), body)
    }

    /// Write a file at `rel` below the project root, creating parents.
    pub fn file(self, rel: &str, body: &str) -> Self {
        let path = self.root().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, body).unwrap();
        self
    }

    /// Read a file below the project root. Panics with the path on failure.
    pub fn read(&self, rel: &str) -> String {
        let path = self.root().join(rel);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
    }
}
