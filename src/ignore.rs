use crate::errors::TreeclipError;
use crate::matcher;
use crate::output::OUTPUT_FILE_NAME;
use glob::Pattern;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Name of the per-project ignore file read from the traversal root.
pub const IGNORE_FILE_NAME: &str = ".treeclipignore";

/// Exclusions applied to every run regardless of other pattern sources.
/// The tool's own output file comes first so a run can never ingest itself.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    OUTPUT_FILE_NAME,
    "*.tmp",
    "*.temp",
    "*.exe",
    "*.sh",
    ".git",
    ".idea",
    ".DS_Store",
    "Thumbs.db",
];

/// The merged, ordered pattern list active for one traversal run.
///
/// Patterns stay as plain strings: a pattern that is not valid glob syntax
/// must still be able to match an entry literally by name, so compilation
/// happens per glob test rather than up front.
pub struct Ruleset {
    patterns: Vec<String>,
}

impl Ruleset {
    /// Builds the ruleset for a run: user patterns, then ignore-file
    /// patterns, then the built-in defaults. Order is irrelevant to the
    /// outcome; any match excludes the entry.
    pub fn merged(user_patterns: &[String], ignore_patterns: &[String]) -> Self {
        let mut patterns: Vec<String> =
            Vec::with_capacity(user_patterns.len() + ignore_patterns.len() + DEFAULT_EXCLUSIONS.len());
        patterns.extend(user_patterns.iter().cloned());
        patterns.extend(ignore_patterns.iter().cloned());
        patterns.extend(DEFAULT_EXCLUSIONS.iter().map(|p| p.to_string()));
        Self::from_patterns(patterns)
    }

    /// Builds a ruleset from exactly the given patterns, without the
    /// built-in defaults.
    pub fn from_patterns(patterns: Vec<String>) -> Self {
        for pattern in &patterns {
            let trimmed = pattern.trim();
            if !trimmed.is_empty() && Pattern::new(&trimmed.replace('\\', "/")).is_err() {
                warn!("Invalid glob pattern '{}': it will only match literally", trimmed);
            }
        }
        debug!("Using exclusion patterns: {:?}", patterns);
        Ruleset { patterns }
    }

    pub fn should_exclude(&self, rel_path: &str, name: &str, is_dir: bool) -> bool {
        matcher::should_exclude(rel_path, name, is_dir, &self.patterns)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

/// Reads `.treeclipignore` from the given root and returns its patterns.
/// A missing file is not an error; the contribution is simply empty.
pub fn load_ignore_patterns(root: &Path) -> Result<Vec<String>, TreeclipError> {
    let ignore_file_path = root.join(IGNORE_FILE_NAME);

    let content = match std::fs::read_to_string(&ignore_file_path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => {
            return Err(TreeclipError::IgnoreFileError(format!(
                "failed to read {}: {}",
                ignore_file_path.display(),
                err
            )))
        }
    };

    let patterns: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.replace('\\', "/"))
        .collect();

    debug!(
        "Loaded {} pattern(s) from {}",
        patterns.len(),
        ignore_file_path.display()
    );
    Ok(patterns)
}
