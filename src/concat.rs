use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::editor::{EditorLauncher, SystemEditor};
use crate::errors::TreeclipError;
use crate::ignore::{self, Ruleset};
use crate::output::{self, OutputSink};
use crate::reporting;
use crate::utils::format_number;
use crate::walker::{self, WalkSummary};
use async_trait::async_trait;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Settings for one concatenation run. Plain data so the core stays
/// callable repeatedly without ambient state.
#[derive(Debug, Clone)]
pub struct ConcatConfig {
    pub root: PathBuf,
    pub exclude_patterns: Vec<String>,
    pub clipboard_enabled: bool,
    pub show_stats: bool,
    pub editor_enabled: bool,
    pub delete_after_edit: bool,
    pub output_path: PathBuf,
}

impl Default for ConcatConfig {
    fn default() -> Self {
        ConcatConfig {
            root: PathBuf::from("."),
            exclude_patterns: Vec::new(),
            clipboard_enabled: true,
            show_stats: false,
            editor_enabled: false,
            delete_after_edit: false,
            output_path: PathBuf::from(output::OUTPUT_FILE_NAME),
        }
    }
}

/// Result of one completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub files_copied: usize,
    pub files_skipped: usize,
    pub output_path: PathBuf,
}

#[async_trait]
pub trait TreeConcatenator {
    async fn concat_tree(&self) -> Result<RunReport, TreeclipError>;
}

pub struct BasicTreeConcatenator {
    config: ConcatConfig,
}

impl BasicTreeConcatenator {
    pub fn new(config: ConcatConfig) -> Self {
        BasicTreeConcatenator { config }
    }

    // User patterns plus, when the output file was renamed, its base name,
    // so a run never ingests its own output.
    fn user_patterns(&self) -> Vec<String> {
        let mut patterns = self.config.exclude_patterns.clone();
        if let Some(name) = self.config.output_path.file_name().and_then(|n| n.to_str()) {
            if name != output::OUTPUT_FILE_NAME {
                patterns.push(name.to_owned());
            }
        }
        patterns
    }

    fn write_output(&self, ruleset: &Ruleset) -> Result<WalkSummary, TreeclipError> {
        let file = File::create(&self.config.output_path)
            .map_err(|err| TreeclipError::OutputWriteError(err.to_string()))?;
        let mut sink = BufWriter::new(file);

        sink.append(output::PREAMBLE.as_bytes())?;
        let summary = walker::traverse(&self.config.root, ruleset, &mut sink)?;
        sink.flush()
            .map_err(|err| TreeclipError::OutputWriteError(err.to_string()))?;
        Ok(summary)
    }

    async fn handle_clipboard(&self) -> Result<(), TreeclipError> {
        info!("Copying content to clipboard");
        let bytes = tokio::fs::read(&self.config.output_path).await?;
        let content = String::from_utf8_lossy(&bytes);

        let mut clipboard = SystemClipboard;
        match clipboard.set_contents(&content).await {
            Ok(()) => {
                if self.config.show_stats {
                    reporting::print_stats(&content);
                }
            }
            Err(err) => {
                warn!("Failed to copy to clipboard: {}", err);
                info!(
                    "Content is still available in: {}",
                    self.config.output_path.display()
                );
            }
        }
        Ok(())
    }

    async fn handle_editor(&self) {
        info!("Opening output file in the default text editor");
        let editor = SystemEditor;
        if let Err(err) = editor.open_and_wait(&self.config.output_path).await {
            warn!("Failed to open editor: {}", err);
            return;
        }

        if self.config.delete_after_edit {
            match tokio::fs::remove_file(&self.config.output_path).await {
                Ok(()) => info!(
                    "Output file deleted: {}",
                    self.config.output_path.display()
                ),
                Err(err) => warn!("Failed to delete output file: {}", err),
            }
        }
    }
}

#[async_trait]
impl TreeConcatenator for BasicTreeConcatenator {
    async fn concat_tree(&self) -> Result<RunReport, TreeclipError> {
        let config = &self.config;

        // Fail on a bad root before the output file is created.
        walker::validate_root(&config.root)?;

        debug!("Loading ignore patterns from {}", config.root.display());
        let ignore_patterns = ignore::load_ignore_patterns(&config.root)?;
        let ruleset = Ruleset::merged(&self.user_patterns(), &ignore_patterns);

        info!("Scanning directory: {}", config.root.display());
        if !config.exclude_patterns.is_empty() {
            info!("User exclusions: {:?}", config.exclude_patterns);
        }
        info!(
            "Writing concatenated contents to: {}",
            config.output_path.display()
        );

        let summary = self.write_output(&ruleset)?;

        if config.clipboard_enabled {
            self.handle_clipboard().await?;
        } else {
            debug!("Clipboard copy skipped (disabled)");
        }

        if config.editor_enabled {
            self.handle_editor().await;
        }

        info!("Files processed: {}", format_number(summary.files_copied));
        info!(
            "Files/folders skipped: {}",
            format_number(summary.files_skipped)
        );
        info!("Output file: {}", config.output_path.display());

        Ok(RunReport {
            files_copied: summary.files_copied,
            files_skipped: summary.files_skipped,
            output_path: config.output_path.clone(),
        })
    }
}

pub async fn concat_tree(config: ConcatConfig) -> Result<RunReport, TreeclipError> {
    let concatenator = BasicTreeConcatenator::new(config);
    concatenator.concat_tree().await
}
