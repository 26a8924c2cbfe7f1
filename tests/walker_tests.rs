use std::fs;
use std::path::Path;
use tempfile::tempdir;
use treeclip::errors::TreeclipError;
use treeclip::ignore::Ruleset;
use treeclip::walker::traverse;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn patterns(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn single_file_round_trip() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("a.txt"), "hi");

    let ruleset = Ruleset::from_patterns(Vec::new());
    let mut sink: Vec<u8> = Vec::new();
    let summary = traverse(dir.path(), &ruleset, &mut sink).unwrap();

    assert_eq!(summary.files_copied, 1);
    assert_eq!(summary.files_skipped, 0);
    assert_eq!(
        String::from_utf8(sink).unwrap(),
        "==> a.txt\nhi\n\n",
        "record must be header, verbatim bytes, blank-line separator"
    );
}

#[test]
fn defaults_plus_explicit_directory_pattern() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("a.txt"), "hi");
    write_file(&dir.path().join("skip.tmp"), "nope");
    write_file(&dir.path().join("node_modules/pkg.js"), "console.log('x')");

    let ruleset = Ruleset::merged(&patterns(&["node_modules"]), &[]);
    let mut sink: Vec<u8> = Vec::new();
    let summary = traverse(dir.path(), &ruleset, &mut sink).unwrap();

    assert_eq!(summary.files_copied, 1, "only a.txt is copied");
    assert_eq!(
        summary.files_skipped, 2,
        "skip.tmp and the node_modules directory are skipped; pkg.js is never visited"
    );
    assert_eq!(String::from_utf8(sink).unwrap(), "==> a.txt\nhi\n\n");
}

#[test]
fn excluded_directory_is_never_descended() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("secret/inner.txt"), "hidden");
    write_file(&dir.path().join("secret/deep/nested.txt"), "hidden too");

    let ruleset = Ruleset::from_patterns(patterns(&["secret"]));
    let mut sink: Vec<u8> = Vec::new();
    let summary = traverse(dir.path(), &ruleset, &mut sink).unwrap();

    assert_eq!(summary.files_copied, 0);
    assert_eq!(summary.files_skipped, 1, "only the pruned directory itself is counted");
    assert!(sink.is_empty(), "nothing beneath a pruned directory may be emitted");
}

#[test]
fn counts_cover_every_visited_entry() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("f1.txt"), "1");
    write_file(&dir.path().join("f2.txt"), "2");
    write_file(&dir.path().join("sub/f3.txt"), "3");
    write_file(&dir.path().join("junk/j1.txt"), "x");
    write_file(&dir.path().join("junk/j2.txt"), "y");

    let ruleset = Ruleset::from_patterns(patterns(&["junk"]));
    let mut sink: Vec<u8> = Vec::new();
    let summary = traverse(dir.path(), &ruleset, &mut sink).unwrap();

    // Three files copied; the pruned junk directory counts once and its
    // contents are never visited.
    assert_eq!(summary.files_copied, 3);
    assert_eq!(summary.files_skipped, 1);
}

#[test]
fn missing_root_fails_before_any_output() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let ruleset = Ruleset::from_patterns(Vec::new());
    let mut sink: Vec<u8> = Vec::new();
    let err = traverse(&missing, &ruleset, &mut sink).unwrap_err();

    assert!(matches!(err, TreeclipError::RootNotFound(_)), "got {:?}", err);
    assert!(sink.is_empty());
}

#[test]
fn file_root_is_rejected() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("plain.txt");
    write_file(&file_path, "not a directory");

    let ruleset = Ruleset::from_patterns(Vec::new());
    let mut sink: Vec<u8> = Vec::new();
    let err = traverse(&file_path, &ruleset, &mut sink).unwrap_err();

    assert!(matches!(err, TreeclipError::RootNotADirectory(_)), "got {:?}", err);
    assert!(sink.is_empty());
}

#[cfg(unix)]
#[test]
fn unreadable_file_gets_placeholder_and_walk_continues() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("a.txt"), "ok");
    // A dangling symlink enumerates like a file but cannot be opened.
    std::os::unix::fs::symlink(dir.path().join("missing-target"), dir.path().join("ghost.txt"))
        .unwrap();

    let ruleset = Ruleset::from_patterns(Vec::new());
    let mut sink: Vec<u8> = Vec::new();
    let summary = traverse(dir.path(), &ruleset, &mut sink).unwrap();

    assert_eq!(summary.files_copied, 2, "the unreadable file still counts as processed");
    let output = String::from_utf8(sink).unwrap();
    assert!(output.contains("==> a.txt\nok\n\n"));
    assert!(output.contains("==> ghost.txt\n[ERROR: Could not read file"));
}

#[test]
fn headers_use_forward_slashes() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("sub/inner.txt"), "deep");

    let ruleset = Ruleset::from_patterns(Vec::new());
    let mut sink: Vec<u8> = Vec::new();
    traverse(dir.path(), &ruleset, &mut sink).unwrap();

    let output = String::from_utf8(sink).unwrap();
    assert!(output.contains("==> sub/inner.txt\n"));
    assert!(!output.contains('\\'), "headers must never contain backslashes");
}

#[test]
fn root_children_are_visited_before_grandchildren() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("b.txt"), "b");
    write_file(&dir.path().join("a.txt"), "a");
    write_file(&dir.path().join("c/d.txt"), "d");

    let ruleset = Ruleset::from_patterns(Vec::new());
    let mut sink: Vec<u8> = Vec::new();
    traverse(dir.path(), &ruleset, &mut sink).unwrap();

    let output = String::from_utf8(sink).unwrap();
    let a = output.find("==> a.txt").expect("a.txt missing");
    let b = output.find("==> b.txt").expect("b.txt missing");
    let d = output.find("==> c/d.txt").expect("c/d.txt missing");
    assert!(a < d && b < d, "root's direct files must precede grandchildren");
}

#[test]
fn own_output_file_is_excluded_by_default() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("a.txt"), "hi");
    write_file(&dir.path().join("treeclip_output.txt"), "stale previous run");

    let ruleset = Ruleset::merged(&[], &[]);
    let mut sink: Vec<u8> = Vec::new();
    let summary = traverse(dir.path(), &ruleset, &mut sink).unwrap();

    assert_eq!(summary.files_copied, 1);
    assert_eq!(summary.files_skipped, 1);
    let output = String::from_utf8(sink).unwrap();
    assert!(!output.contains("==> treeclip_output.txt"));
    assert!(!output.contains("stale previous run"));
}

struct FailingSink;

impl std::io::Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "sink closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_write_failure_propagates_instead_of_aborting_the_process() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("a.txt"), "hi");

    let ruleset = Ruleset::from_patterns(Vec::new());
    let mut sink = FailingSink;
    let err = traverse(dir.path(), &ruleset, &mut sink).unwrap_err();

    assert!(matches!(err, TreeclipError::OutputWriteError(_)), "got {:?}", err);
}
