//! Edge case and error handling tests for heft


use harness::{TestDir, run_heft};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};
use std::path::Path;

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let dir = TestDir::new();
    dir.add_file("subdir/file.bin", 10);
    symlink("..", dir.path().join("subdir").join("parent")).expect("Failed to create symlink");

    let (stdout, _stderr, code) = run_heft(dir.path(), &["."]);
    assert_eq!(code, Some(0), "heft should not hang on parent symlink");
    assert!(stdout.contains("subdir"), "should show subdir");
}

#[test]
fn test_symlinked_directory_not_descended() {
    let dir = TestDir::new();
    dir.add_file("realdir/big.bin", 5_000);
    symlink(dir.path().join("realdir"), dir.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let (stdout, _stderr, code) = run_heft(dir.path(), &["."]);
    assert_eq!(code, Some(0));
    // Only the link itself is tallied, not a second copy of its target.
    assert!(stdout.contains("  5.00 KB realdir"), "{}", stdout);
    assert!(!stdout.contains("linkdir"), "link is not a directory: {}", stdout);
}

#[test]
fn test_follow_links_cycle_aborts_walk() {
    let dir = TestDir::new();
    dir.add_file("a/file.bin", 10);
    symlink("..", dir.path().join("a").join("loop")).expect("Failed to create symlink");

    let (stdout, stderr, code) = run_heft(dir.path(), &[".", "--follow-links"]);
    assert_eq!(code, Some(2), "a link cycle should abort the walk");
    assert!(
        stderr.contains("failed to calculate size of directory ."),
        "stderr: {}",
        stderr
    );
    assert!(stderr.to_lowercase().contains("loop"), "stderr: {}", stderr);
    // Entries visited before the cycle are still reported.
    assert!(stdout.contains(" 10.00 B a (self  10.00 B)"), "{}", stdout);
}

#[test]
fn test_follow_links_cycle_keep_going() {
    let dir = TestDir::new();
    dir.add_file("a/file.bin", 10);
    dir.add_file("b/file.bin", 20);
    symlink("..", dir.path().join("a").join("loop")).expect("Failed to create symlink");

    let (stdout, _stderr, code) = run_heft(dir.path(), &[".", "--follow-links", "--keep-going"]);
    assert_eq!(code, Some(2));
    assert!(stdout.contains(" 30.00 B . (self   0.00 B)"), "{}", stdout);
}

// ============================================================================
// Unreadable Entries
// ============================================================================

/// Make `path` unreadable. Returns false when permissions are not enforced
/// (e.g. running as root), in which case the caller should skip.
fn lock(path: &Path) -> bool {
    fs::set_permissions(path, fs::Permissions::from_mode(0o000)).expect("chmod");
    fs::read_dir(path).is_err()
}

fn unlock(path: &Path) {
    let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o755));
}

#[test]
fn test_unreadable_dir_aborts_walk() {
    let dir = TestDir::new();
    dir.add_file("a.bin", 10);
    dir.add_file("locked/inner.bin", 10);
    dir.add_file("zzz/after.bin", 10);
    let locked = dir.path().join("locked");
    if !lock(&locked) {
        unlock(&locked);
        return;
    }

    let (stdout, stderr, code) = run_heft(dir.path(), &["."]);
    unlock(&locked);

    assert_eq!(code, Some(2), "aborted walk should exit non-zero");
    assert!(
        stderr.contains("failed to calculate size of directory ."),
        "stderr: {}",
        stderr
    );
    assert!(stdout.starts_with("`--"), "partial tree still printed");
    assert!(!stdout.contains("zzz"), "walk should stop: {}", stdout);
}

#[test]
fn test_unreadable_dir_keep_going() {
    let dir = TestDir::new();
    dir.add_file("a.bin", 10);
    dir.add_file("locked/inner.bin", 10);
    dir.add_file("zzz/after.bin", 10);
    let locked = dir.path().join("locked");
    if !lock(&locked) {
        unlock(&locked);
        return;
    }

    let (stdout, stderr, code) = run_heft(dir.path(), &[".", "--keep-going"]);
    unlock(&locked);

    assert_eq!(code, Some(2), "skipped entries should exit non-zero");
    assert!(stderr.contains("could not be read"), "stderr: {}", stderr);
    assert!(stdout.contains("zzz"), "walk should continue: {}", stdout);
    assert!(stdout.contains(" 20.00 B . (self  10.00 B)"), "{}", stdout);
}
