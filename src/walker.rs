use crate::errors::TreeclipError;
use crate::ignore::Ruleset;
use crate::output::{self, OutputSink};
use crate::utils::normalize_path;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

const COPY_BUFFER_SIZE: usize = 8 * 1024;

/// Counts for one completed traversal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    pub files_copied: usize,
    pub files_skipped: usize,
}

/// Checks that the traversal root exists and is a directory.
pub fn validate_root(root: &Path) -> Result<(), TreeclipError> {
    let metadata = std::fs::metadata(root).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            TreeclipError::RootNotFound(root.display().to_string())
        } else {
            TreeclipError::IoError(format!("{}: {}", root.display(), err))
        }
    })?;
    if !metadata.is_dir() {
        return Err(TreeclipError::RootNotADirectory(root.display().to_string()));
    }
    Ok(())
}

/// Walks `root` depth-first in lexical order, writing every included file
/// to `sink` as a header record, the file's raw bytes, and a separator.
///
/// Excluded directories are pruned without descending, so nothing beneath
/// them is enumerated or emitted. A file that cannot be read gets a
/// diagnostic placeholder and the walk continues; a directory listing that
/// cannot be read aborts the walk.
pub fn traverse(
    root: &Path,
    ruleset: &Ruleset,
    sink: &mut dyn OutputSink,
) -> Result<WalkSummary, TreeclipError> {
    validate_root(root)?;

    let mut summary = WalkSummary::default();
    let mut entries = WalkDir::new(root).sort_by_file_name().into_iter();

    while let Some(entry) = entries.next() {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| root.display().to_string());
            TreeclipError::DirectoryUnreadable(format!("{}: {}", path, err))
        })?;

        // The root itself is neither matched nor counted.
        if entry.depth() == 0 {
            continue;
        }

        let rel_path = entry
            .path()
            .strip_prefix(root)
            .map(normalize_path)
            .unwrap_or_else(|_| normalize_path(entry.path()));
        let name = entry.file_name().to_string_lossy();
        let is_dir = entry.file_type().is_dir();

        if ruleset.should_exclude(&rel_path, &name, is_dir) {
            summary.files_skipped += 1;
            if is_dir {
                debug!("Skipping directory: {}", rel_path);
                entries.skip_current_dir();
            } else {
                debug!("Skipping file: {}", rel_path);
            }
            continue;
        }

        if is_dir {
            trace!("Descending into: {}", rel_path);
            continue;
        }

        summary.files_copied += 1;
        debug!("Processing: {}", rel_path);

        output::write_header(sink, &rel_path)?;
        copy_file_contents(entry.path(), &rel_path, sink)?;
        output::write_separator(sink)?;
    }

    Ok(summary)
}

// Streams one file into the sink in bounded chunks. Read failures are
// absorbed with a placeholder so one bad file never aborts the run; sink
// failures propagate.
fn copy_file_contents(
    path: &Path,
    rel_path: &str,
    sink: &mut dyn OutputSink,
) -> Result<(), TreeclipError> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            warn!("Failed to open {}: {}", rel_path, err);
            return sink.append(format!("[ERROR: Could not read file - {}]\n", err).as_bytes());
        }
    };

    let mut buffer = [0u8; COPY_BUFFER_SIZE];
    loop {
        match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => sink.append(&buffer[..n])?,
            Err(err) => {
                warn!("Failed to read {}: {}", rel_path, err);
                sink.append(format!("[ERROR: Could not copy file content - {}]\n", err).as_bytes())?;
                break;
            }
        }
    }

    Ok(())
}
