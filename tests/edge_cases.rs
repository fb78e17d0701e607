//! Edge case and error handling tests for orchard


use harness::{TempTree, run_orchard};

// ============================================================================
// Empty and Unusual Roots
// ============================================================================

#[test]
fn test_empty_directory() {
    let tree = TempTree::new();

    let (stdout, _stderr, success) = run_orchard(tree.path(), &[]);
    assert!(success, "empty directory should succeed");
    assert!(
        stdout.contains("0 directories, 0 files"),
        "should report empty tree: {}",
        stdout
    );
}

#[test]
fn test_root_with_only_empty_subdirs() {
    let tree = TempTree::new();
    tree.add_dir("a");
    tree.add_dir("b");

    let (stdout, _stderr, success) = run_orchard(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("2 directories, 0 files"), "{}", stdout);
}

#[test]
fn test_file_as_path_argument_fails() {
    let tree = TempTree::new();
    tree.add_file("plain.txt", "content");

    let (_stdout, stderr, success) = run_orchard(tree.path(), &["plain.txt"]);
    assert!(!success, "file root should fail");
    assert!(stderr.contains("cannot access"), "{}", stderr);
}

// ============================================================================
// Names That Stress Ordering
// ============================================================================

#[test]
fn test_case_variants_sort_adjacently() {
    let tree = TempTree::new();
    tree.add_file("zebra.txt", "");
    tree.add_file("APPLE.txt", "");
    tree.add_file("apple.md", "");

    let (stdout, _stderr, success) = run_orchard(tree.path(), &[]);
    assert!(success);

    let apple_md = stdout.find("apple.md").unwrap();
    let apple_txt = stdout.find("APPLE.txt").unwrap();
    let zebra = stdout.find("zebra.txt").unwrap();
    assert!(
        apple_md < apple_txt && apple_txt < zebra,
        "case-insensitive order violated: {}",
        stdout
    );
}

#[test]
fn test_names_with_spaces_and_dots() {
    let tree = TempTree::new();
    tree.add_file("my file.txt", "");
    tree.add_file(".hidden", "");
    tree.add_file("a.b.c.txt", "");

    let (stdout, _stderr, success) = run_orchard(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("my file.txt"));
    assert!(stdout.contains(".hidden"), "hidden files are not special");
    assert!(stdout.contains("a.b.c.txt"));
}

#[test]
fn test_unicode_names() {
    let tree = TempTree::new();
    tree.add_file("日本語.txt", "");
    tree.add_file("Ünïcödé.rs", "");

    let (stdout, _stderr, success) = run_orchard(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("日本語.txt"));
    assert!(stdout.contains("Ünïcödé.rs"));
}

// ============================================================================
// Deep and Wide Trees
// ============================================================================

#[test]
fn test_deeply_nested_tree() {
    let tree = TempTree::new();
    let deep_path = (0..20).map(|i| format!("d{}", i)).collect::<Vec<_>>();
    tree.add_file(&format!("{}/leaf.txt", deep_path.join("/")), "");

    let (stdout, _stderr, success) = run_orchard(tree.path(), &[]);
    assert!(success, "deep nesting should succeed");
    assert!(stdout.contains("leaf.txt"), "should reach the leaf");
    assert!(stdout.contains("20 directories, 1 files"), "{}", stdout);
}

#[test]
fn test_wide_directory() {
    let tree = TempTree::new();
    for i in 0..100 {
        tree.add_file(&format!("file_{:03}.txt", i), "");
    }

    let (stdout, _stderr, success) = run_orchard(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("0 directories, 100 files"), "{}", stdout);

    let first = stdout.find("file_000.txt").unwrap();
    let last = stdout.find("file_099.txt").unwrap();
    assert!(first < last, "wide listing out of order");
}

// ============================================================================
// Symlinks
// ============================================================================

#[cfg(unix)]
#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    use std::os::unix::fs::symlink;

    let tree = TempTree::new();
    tree.add_file("subdir/file.txt", "");

    // Create symlink from subdir/parent -> .. (potential infinite loop)
    let link_path = tree.path().join("subdir").join("parent");
    symlink("..", &link_path).expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_orchard(tree.path(), &[]);
    assert!(success, "orchard should not hang on parent symlink");
    assert!(stdout.contains("subdir"), "should show subdir");
    assert!(stdout.contains("file.txt"), "should show file in subdir");
    assert!(stdout.contains("parent"), "should show the link itself");
}

#[cfg(unix)]
#[test]
fn test_broken_symlink_listed() {
    use std::os::unix::fs::symlink;

    let tree = TempTree::new();
    tree.add_file("real.txt", "");

    let link_path = tree.path().join("dangling");
    symlink("nonexistent.txt", &link_path).expect("Failed to create broken symlink");

    let (stdout, _stderr, success) = run_orchard(tree.path(), &[]);
    assert!(success, "orchard should handle broken symlinks");
    assert!(stdout.contains("real.txt"));
    assert!(stdout.contains("dangling"), "broken link is still an entry");
}

// ============================================================================
// Filters Interacting
// ============================================================================

#[test]
fn test_dirs_only_with_depth_limit() {
    let tree = TempTree::new();
    tree.add_file("a/b/c/deep.txt", "");

    let (stdout, _stderr, success) = run_orchard(tree.path(), &["-d", "-L", "2"]);
    assert!(success);
    assert!(stdout.contains("a"), "should show first level dir");
    assert!(stdout.contains("b"), "should show second level dir");
    assert!(!stdout.contains("c\n"), "should cut below the limit");
    assert!(!stdout.contains("deep.txt"), "files are hidden");
}

#[test]
fn test_multiple_ignore_patterns() {
    let tree = TempTree::new();
    tree.add_file("keep.rs", "");
    tree.add_file("skip.log", "");
    tree.add_file("node_modules/pkg/index.js", "");

    let (stdout, _stderr, success) =
        run_orchard(tree.path(), &["-I", "*.log", "-I", "node_modules"]);
    assert!(success);
    assert!(stdout.contains("keep.rs"));
    assert!(!stdout.contains("skip.log"), "{}", stdout);
    assert!(!stdout.contains("index.js"), "{}", stdout);
}

#[test]
fn test_level_zero_shows_nothing_but_summary() {
    let tree = TempTree::new();
    tree.add_file("a.txt", "");

    let (stdout, _stderr, success) = run_orchard(tree.path(), &["-L", "0"]);
    assert!(success);
    assert!(!stdout.contains("a.txt"), "{}", stdout);
    assert!(stdout.contains("0 directories, 0 files"), "{}", stdout);
}

// ============================================================================
// Error Reporting
// ============================================================================

#[test]
fn test_report_errors_silent_on_clean_tree() {
    let tree = TempTree::new();
    tree.add_file("fine.txt", "");

    let (_stdout, stderr, success) = run_orchard(tree.path(), &["--report-errors"]);
    assert!(success);
    assert!(
        !stderr.contains("cannot read"),
        "no errors expected: {}",
        stderr
    );
}
