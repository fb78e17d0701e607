//! Best-effort directory tree deletion

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::walk::TreeIter;

/// Default retry bound for [`remove_tree`].
pub const DEFAULT_MAX_PASSES: usize = 10;

/// Error from [`remove_tree`].
#[derive(Debug, Error)]
pub enum RemoveError {
    /// Entries survived every deletion pass (open handles, permissions, or
    /// files appearing faster than they are removed).
    #[error("{remaining} entries still present under {root:?} after {passes} passes")]
    RetriesExhausted {
        root: PathBuf,
        remaining: usize,
        passes: usize,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Delete `root` and everything under it.
///
/// Each pass walks the tree, removes files, then removes directories
/// deepest-first. Individual failures are ignored within a pass and retried
/// on the next, up to `max_passes`. A root that does not exist is a no-op
/// success. Entries still present after the final pass fail with
/// [`RemoveError::RetriesExhausted`]; the root directory itself is removed
/// last, once empty.
pub fn remove_tree(root: &Path, max_passes: usize) -> Result<(), RemoveError> {
    if !root.exists() {
        return Ok(());
    }

    for _ in 0..max_passes {
        let entries: Vec<PathBuf> = TreeIter::new(root).collect();
        if entries.is_empty() {
            break;
        }

        let mut dirs = Vec::new();
        for entry in &entries {
            // Symlinks are removed as links, never followed.
            let is_real_dir = entry
                .symlink_metadata()
                .map(|m| m.is_dir())
                .unwrap_or(false);
            if is_real_dir {
                dirs.push(entry);
            } else {
                let _ = fs::remove_file(entry);
            }
        }
        // Reverse pre-order empties children before their parents.
        for dir in dirs.iter().rev() {
            let _ = fs::remove_dir(dir);
        }
    }

    let remaining = TreeIter::new(root).count();
    if remaining > 0 {
        return Err(RemoveError::RetriesExhausted {
            root: root.to_path_buf(),
            remaining,
            passes: max_passes,
        });
    }

    fs::remove_dir(root)?;
    Ok(())
}
