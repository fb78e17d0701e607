//! Rendering of traversal results
//!
//! The walk yields a flat pre-order sequence of paths; this module
//! annotates it into [`Entry`] values and renders them either as a
//! connector-drawn console tree ([`TreeFormatter`]) or as nested JSON
//! ([`build_tree`] / [`print_json`]).

mod json;
mod tree;
mod utils;

pub use json::{TreeNode, build_tree, print_json};
pub use tree::TreeFormatter;
pub use utils::format_size;

use std::path::{Path, PathBuf};

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
}

/// One traversal result annotated for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Full path as yielded by the walk.
    pub path: PathBuf,
    /// Path relative to the traversal root.
    pub rel: PathBuf,
    pub name: String,
    /// Levels below the root; direct children are depth 1.
    pub depth: usize,
    pub is_dir: bool,
    pub size_bytes: Option<u64>,
}

/// Annotate a walk's output into display entries.
///
/// `root` must be the directory the iterator was created over. Sizes are
/// only probed for files, and only when `probe_sizes` is set.
pub fn collect_entries(
    root: &Path,
    iter: impl Iterator<Item = PathBuf>,
    probe_sizes: bool,
) -> Vec<Entry> {
    iter.map(|path| {
        let rel = path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());
        let depth = rel.components().count().max(1);
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let is_dir = path.is_dir() && !path.is_symlink();
        let size_bytes = if probe_sizes && !is_dir {
            path.metadata().ok().map(|m| m.len())
        } else {
            None
        };
        Entry {
            path,
            rel,
            name,
            depth,
            is_dir,
            size_bytes,
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    use crate::walk::TreeIter;

    #[test]
    fn test_collect_annotates_depth_and_kind() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/leaf.txt"), "abc").unwrap();

        let entries = collect_entries(dir.path(), TreeIter::new(dir.path()), true);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].name, "sub");
        assert_eq!(entries[0].depth, 1);
        assert!(entries[0].is_dir);
        assert_eq!(entries[0].size_bytes, None);

        assert_eq!(entries[1].name, "leaf.txt");
        assert_eq!(entries[1].depth, 2);
        assert!(!entries[1].is_dir);
        assert_eq!(entries[1].size_bytes, Some(3));
    }

    #[test]
    fn test_collect_without_size_probe() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("leaf.txt"), "abc").unwrap();

        let entries = collect_entries(dir.path(), TreeIter::new(dir.path()), false);
        assert_eq!(entries[0].size_bytes, None);
    }
}
