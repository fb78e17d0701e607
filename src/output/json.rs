//! JSON output formatting

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::Entry;
use super::utils::format_size;

/// Nested node for JSON output, rebuilt from the flat pre-order entry list.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
        #[serde(skip_serializing_if = "Option::is_none")]
        size_bytes: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        size_human: Option<String>,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }
}

/// Rebuild the nested tree from a flat pre-order entry list.
///
/// The root node carries the given label and path; entries must be in walk
/// order (children immediately after their parent, one level deeper).
pub fn build_tree(root_label: &str, root_path: &Path, entries: &[Entry]) -> TreeNode {
    let mut pos = 0;
    let children = build_children(entries, &mut pos, 1);
    TreeNode::Dir {
        name: root_label.to_string(),
        path: root_path.to_path_buf(),
        children,
    }
}

fn build_children(entries: &[Entry], pos: &mut usize, depth: usize) -> Vec<TreeNode> {
    let mut nodes = Vec::new();
    while *pos < entries.len() && entries[*pos].depth == depth {
        let entry = &entries[*pos];
        *pos += 1;
        if entry.is_dir {
            let children = build_children(entries, pos, depth + 1);
            nodes.push(TreeNode::Dir {
                name: entry.name.clone(),
                path: entry.path.clone(),
                children,
            });
        } else {
            nodes.push(TreeNode::File {
                name: entry.name.clone(),
                path: entry.path.clone(),
                size_bytes: entry.size_bytes,
                size_human: entry.size_bytes.map(format_size),
            });
        }
    }
    nodes
}

/// Print a tree node as pretty-printed JSON to stdout.
pub fn print_json(node: &TreeNode) -> io::Result<()> {
    let json = serde_json::to_string_pretty(node).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
