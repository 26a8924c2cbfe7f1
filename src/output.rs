use crate::errors::TreeclipError;
use std::io::Write;

/// Default name of the concatenated output file, created in the working
/// directory. Also part of the default exclusions.
pub const OUTPUT_FILE_NAME: &str = "treeclip_output.txt";

/// Informational comment line written before the first record.
pub const PREAMBLE: &str =
    "// Paths are displayed in Unix-style format (forward slashes) for cross-platform consistency\n";

/// Append-only destination for concatenated records. The sink is owned by
/// the caller; the walker only writes to it and never closes or reopens it.
/// Write failures surface to the caller instead of aborting the process.
pub trait OutputSink {
    fn append(&mut self, bytes: &[u8]) -> Result<(), TreeclipError>;
}

impl<W: Write> OutputSink for W {
    fn append(&mut self, bytes: &[u8]) -> Result<(), TreeclipError> {
        self.write_all(bytes)
            .map_err(|err| TreeclipError::OutputWriteError(err.to_string()))
    }
}

/// Writes the header record for one file. The path is already normalized to
/// forward slashes, so the emitted header never contains backslashes.
pub fn write_header(sink: &mut dyn OutputSink, rel_path: &str) -> Result<(), TreeclipError> {
    sink.append(format!("==> {}\n", rel_path).as_bytes())
}

/// Writes the blank-line separator that terminates one record.
pub fn write_separator(sink: &mut dyn OutputSink) -> Result<(), TreeclipError> {
    sink.append(b"\n\n")
}
