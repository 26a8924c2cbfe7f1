use crate::errors::TreeclipError;
use arboard::Clipboard;
use async_trait::async_trait;
use tracing::{debug, info};

/// Capability for placing the concatenated output on a clipboard. The
/// traversal core never depends on this; only the run layer does.
#[async_trait]
pub trait ClipboardSink {
    async fn set_contents(&mut self, content: &str) -> Result<(), TreeclipError>;
}

/// System clipboard backed by `arboard`.
pub struct SystemClipboard;

#[async_trait]
impl ClipboardSink for SystemClipboard {
    async fn set_contents(&mut self, content: &str) -> Result<(), TreeclipError> {
        debug!("Initializing clipboard");
        let mut clipboard =
            Clipboard::new().map_err(|err| TreeclipError::ClipboardInitError(err.to_string()))?;

        clipboard
            .set_text(content)
            .map_err(|err| TreeclipError::ClipboardWriteError(err.to_string()))?;

        info!("Content copied to clipboard successfully");
        Ok(())
    }
}
