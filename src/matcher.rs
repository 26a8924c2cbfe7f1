use glob::{MatchOptions, Pattern};

// Mirrors shell matching where `*` stays within one path segment.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Checks if a file or directory should be excluded based on the exclude
/// patterns. Supports exact name, exact relative path, shell-style globs
/// against the name or the path, and (for directories) matches against any
/// path segment so a bare directory name excludes it at any depth.
///
/// Pure with respect to its arguments: no filesystem access, identical
/// inputs always produce the same answer.
pub fn should_exclude(rel_path: &str, name: &str, is_dir: bool, patterns: &[String]) -> bool {
    let normalized_rel_path = rel_path.replace('\\', "/");

    for pattern in patterns {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            continue;
        }
        let normalized_pattern = pattern.replace('\\', "/");

        // Exact name match, including patterns written with a path prefix
        // ("src/app.rs" excludes any file named "app.rs").
        if name == normalized_pattern || Some(name) == final_segment(&normalized_pattern) {
            return true;
        }

        // Exact relative path match.
        if normalized_rel_path == normalized_pattern {
            return true;
        }

        // Glob match against the base name.
        if glob_match(&normalized_pattern, name) {
            return true;
        }

        // Glob match against the relative path, anchored at the walk root.
        if glob_match(&normalized_pattern, &normalized_rel_path) {
            return true;
        }

        // For directories, a pattern may name any ancestor segment.
        if is_dir
            && normalized_rel_path
                .split('/')
                .any(|part| part == normalized_pattern || glob_match(&normalized_pattern, part))
        {
            return true;
        }
    }

    false
}

fn final_segment(pattern: &str) -> Option<&str> {
    pattern.rsplit('/').next()
}

// Malformed glob syntax means this rule does not match; the pattern's
// literal checks still apply and remaining patterns still run.
fn glob_match(pattern: &str, text: &str) -> bool {
    match Pattern::new(pattern) {
        Ok(compiled) => compiled.matches_with(text, MATCH_OPTIONS),
        Err(_) => false,
    }
}
