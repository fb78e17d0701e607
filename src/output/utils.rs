//! Shared utility functions for output formatting

use super::Entry;

/// Format a size in bytes to human-readable form.
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[(u64, &str)] = &[
        (1024 * 1024 * 1024, "G"),
        (1024 * 1024, "M"),
        (1024, "K"),
    ];
    for &(scale, suffix) in UNITS {
        if bytes >= scale {
            return format!("{:.1}{}", bytes as f64 / scale as f64, suffix);
        }
    }
    format!("{}B", bytes)
}

/// For each entry in a flat pre-order list, whether it is the last sibling
/// at its level. Single right-to-left pass: a deeper scope closes whenever
/// the scan reaches a shallower entry.
pub fn last_flags(entries: &[Entry]) -> Vec<bool> {
    let mut flags = vec![true; entries.len()];
    let mut seen: Vec<bool> = Vec::new();
    for i in (0..entries.len()).rev() {
        let depth = entries[i].depth;
        if seen.len() < depth {
            seen.resize(depth, false);
        }
        seen.truncate(depth);
        flags[i] = !seen[depth - 1];
        seen[depth - 1] = true;
    }
    flags
}
