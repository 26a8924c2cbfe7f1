use std::path::Path;
use treeclip::utils::{format_bytes, format_number, normalize_path};

#[test]
fn format_bytes_picks_sensible_units() {
    assert_eq!(format_bytes(0), "0 B");
    assert_eq!(format_bytes(512), "512 B");
    assert_eq!(format_bytes(1024), "1.0 KB");
    assert_eq!(format_bytes(1536), "1.5 KB");
    assert_eq!(format_bytes(1048576), "1.0 MB");
    assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5.0 GB");
}

#[test]
fn format_number_inserts_thousands_separators() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(999), "999");
    assert_eq!(format_number(1000), "1,000");
    assert_eq!(format_number(1234567), "1,234,567");
}

#[test]
fn normalize_path_uses_forward_slashes() {
    assert_eq!(normalize_path(Path::new("a/b/c.txt")), "a/b/c.txt");
    assert_eq!(normalize_path(Path::new("a\\b\\c.txt")), "a/b/c.txt");
}
