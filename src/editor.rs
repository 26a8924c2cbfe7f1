use crate::errors::TreeclipError;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Capability for opening the output file in the platform's default text
/// editor and waiting until it is closed.
#[async_trait]
pub trait EditorLauncher {
    async fn open_and_wait(&self, path: &Path) -> Result<(), TreeclipError>;
}

/// Launches whatever the OS considers the default handler for the file.
pub struct SystemEditor;

#[async_trait]
impl EditorLauncher for SystemEditor {
    async fn open_and_wait(&self, path: &Path) -> Result<(), TreeclipError> {
        let mut command = if cfg!(target_os = "macos") {
            let mut command = Command::new("open");
            command.arg("-W").arg(path);
            command
        } else if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", "/WAIT"]).arg(path);
            command
        } else {
            let mut command = Command::new("xdg-open");
            command.arg(path);
            command
        };

        debug!("Opening {} in the default editor", path.display());
        let status = command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|err| TreeclipError::EditorError(err.to_string()))?;

        if !status.success() {
            return Err(TreeclipError::EditorError(format!(
                "editor exited with status {}",
                status
            )));
        }
        Ok(())
    }
}
