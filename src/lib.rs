//! Orchard - depth-first directory walking with tree and JSON output

pub mod copy;
pub mod file_utils;
pub mod filter;
pub mod output;
pub mod remove;
#[cfg(feature = "test-utils")]
pub mod test_utils;
pub mod walk;

pub use copy::{CopyError, copy_limited};
pub use filter::DisplayFilter;
pub use output::{Entry, OutputConfig, TreeFormatter, TreeNode, collect_entries, print_json};
pub use remove::{RemoveError, remove_tree};
pub use walk::TreeIter;
