//! Display-level filtering of traversal entries
//!
//! The walk itself yields every descendant; the CLI narrows what gets
//! shown. Ignoring a name hides the whole subtree under it, since every
//! descendant carries the ignored component in its relative path.

use glob::Pattern;

use crate::output::Entry;

/// Filters applied to the flat entry list before rendering.
#[derive(Debug, Clone, Default)]
pub struct DisplayFilter {
    pub dirs_only: bool,
    /// Deepest level to show; direct children of the root are level 1.
    pub max_depth: Option<usize>,
    /// Glob patterns matched against each component of the relative path.
    pub ignore_patterns: Vec<String>,
}

impl DisplayFilter {
    pub fn keep(&self, entry: &Entry) -> bool {
        if self.dirs_only && !entry.is_dir {
            return false;
        }
        if self.max_depth.is_some_and(|max| entry.depth > max) {
            return false;
        }
        if !self.ignore_patterns.is_empty() {
            for component in entry.rel.components() {
                let name = component.as_os_str().to_string_lossy();
                for pattern in &self.ignore_patterns {
                    if name == *pattern || glob_match(pattern, &name) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
