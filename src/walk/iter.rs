//! TreeIter - lazy pre-order walk with an explicit frame stack

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use super::order::{list_children, sort_case_insensitive};

type ReadErrorHook = Box<dyn FnMut(&Path, &io::Error)>;

/// Lazy depth-first pre-order traversal of a directory tree.
///
/// Yields the full path of every descendant of the root, exactly once each,
/// with siblings in ascending case-insensitive name order. The root itself
/// is never yielded. A root that does not exist, is not a directory, or is
/// empty produces a traversal with no entries.
///
/// The cursor keeps one next-child index per open directory level and the
/// sorted child names of the deepest level only. Parent levels are
/// re-listed from the filesystem when the walk pops back into them, so a
/// tree mutated mid-walk yields a best-effort sequence rather than a
/// snapshot. Directories that fail to list are treated as having no
/// children; install a hook with [`TreeIter::on_read_error`] to observe
/// those failures without changing the walk.
///
/// Symlinks are yielded but never descended through, so cyclic links
/// cannot loop the walk.
pub struct TreeIter {
    /// Deepest directory currently being scanned.
    current_dir: PathBuf,
    /// Next-child index for each level from the root down to `current_dir`.
    /// Empty stack means the walk is exhausted.
    frames: Vec<usize>,
    /// Sorted child names of `current_dir`. Levels above are not cached.
    names: Vec<OsString>,
    primed: bool,
    read_error_hook: Option<ReadErrorHook>,
}

impl TreeIter {
    /// Create a traversal rooted at `root`.
    ///
    /// No filesystem access happens until the first `next()` or `peek()`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: root.into(),
            frames: Vec::new(),
            names: Vec::new(),
            primed: false,
            read_error_hook: None,
        }
    }

    /// Install a callback invoked whenever listing a directory fails.
    ///
    /// The failed directory is still treated as having no children; the
    /// hook only observes.
    pub fn on_read_error<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&Path, &io::Error) + 'static,
    {
        self.read_error_hook = Some(Box::new(hook));
        self
    }

    /// Path of the next entry the walk will yield, without advancing.
    pub fn peek(&mut self) -> Option<PathBuf> {
        self.prime();
        let idx = *self.frames.last()?;
        Some(self.current_dir.join(&self.names[idx]))
    }

    /// List and sort a level's children. A listing failure reports to the
    /// hook and reads as an empty level.
    fn read_level(hook: &mut Option<ReadErrorHook>, dir: &Path) -> Vec<OsString> {
        match list_children(dir) {
            Ok(mut names) => {
                sort_case_insensitive(&mut names);
                names
            }
            Err(e) => {
                if let Some(hook) = hook.as_mut() {
                    hook(dir, &e);
                }
                Vec::new()
            }
        }
    }

    /// Open the root level on first use.
    fn prime(&mut self) {
        if self.primed {
            return;
        }
        self.primed = true;
        self.names = Self::read_level(&mut self.read_error_hook, &self.current_dir);
        if !self.names.is_empty() {
            self.frames.push(0);
        }
    }

    /// Move the cursor past `entry`, the path just captured for return.
    fn advance(&mut self, entry: &Path) {
        // Descend into a directory with children; symlinked directories are
        // not followed so cyclic links cannot loop the walk.
        if entry.is_dir() && !entry.is_symlink() {
            let children = Self::read_level(&mut self.read_error_hook, entry);
            if !children.is_empty() {
                self.current_dir = entry.to_path_buf();
                self.names = children;
                self.frames.push(0);
                return;
            }
        }
        self.next_sibling();
    }

    /// Step to the next sibling, popping exhausted levels as needed.
    fn next_sibling(&mut self) {
        if let Some(top) = self.frames.last_mut() {
            *top += 1;
        }
        while let Some(&idx) = self.frames.last() {
            if idx < self.names.len() {
                return;
            }
            // Level exhausted: pop back to the parent, re-list it, and skip
            // past the subdirectory the walk just finished.
            self.frames.pop();
            if self.frames.is_empty() {
                self.names.clear();
                return;
            }
            self.current_dir.pop();
            self.names = Self::read_level(&mut self.read_error_hook, &self.current_dir);
            if let Some(top) = self.frames.last_mut() {
                *top += 1;
            }
        }
    }
}

impl Iterator for TreeIter {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        self.prime();
        let idx = *self.frames.last()?;
        let entry = self.current_dir.join(&self.names[idx]);
        self.advance(&entry);
        Some(entry)
    }
}

impl std::iter::FusedIterator for TreeIter {}
