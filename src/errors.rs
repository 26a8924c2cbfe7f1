use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeclipError {
    #[error("Root path not found: {0}")]
    RootNotFound(String),

    #[error("Root path is not a directory: {0}")]
    RootNotADirectory(String),

    #[error("Directory unreadable: {0}")]
    DirectoryUnreadable(String),

    #[error("Output write failed: {0}")]
    OutputWriteError(String),

    #[error("Ignore file error: {0}")]
    IgnoreFileError(String),

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("Editor error: {0}")]
    EditorError(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for TreeclipError {
    fn from(err: std::io::Error) -> Self {
        TreeclipError::IoError(err.to_string())
    }
}
