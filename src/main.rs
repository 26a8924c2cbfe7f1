use clap::{Parser, Subcommand};
use std::path::PathBuf;
use treeclip::concat::{concat_tree, ConcatConfig};
use treeclip::logger::initialize_logger;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    #[command(subcommand)]
    cmd: SubCommands,
}

#[derive(Subcommand, Debug, Clone)]
enum SubCommands {
    Run(RunArgs),
}

/// Traverse a folder and output all file contents into a text file.
#[derive(Parser, Debug, Clone)]
struct RunArgs {
    /// Directory to traverse (defaults to the current directory)
    path: Option<String>,
    #[arg(
        short = 'e',
        long = "exclude",
        help = "Exclude files/folders matching these patterns (can be used multiple times)"
    )]
    exclude: Vec<String>,
    #[arg(short = 'n', long, default_value = "false", help = "Do not copy output to clipboard")]
    no_clipboard: bool,
    #[arg(long, default_value = "false", help = "Show clipboard content statistics")]
    stats: bool,
    #[arg(
        short = 'o',
        long,
        default_value = "false",
        help = "Open output file in the default text editor"
    )]
    editor: bool,
    #[arg(
        long,
        default_value = "false",
        help = "Delete the output file after the editor closes"
    )]
    delete_after_edit: bool,
}

#[tokio::main]
async fn main() {
    let cli_args = CliArgs::parse();
    initialize_logger();

    match cli_args.cmd {
        SubCommands::Run(args) => {
            let mut config = ConcatConfig::default();
            if let Some(path) = args.path {
                config.root = PathBuf::from(path);
            }
            config.exclude_patterns = args.exclude;
            config.clipboard_enabled = !args.no_clipboard;
            config.show_stats = args.stats;
            config.editor_enabled = args.editor;
            config.delete_after_edit = args.delete_after_edit;

            match concat_tree(config).await {
                Ok(_) => info!("Process completed"),
                Err(e) => {
                    eprintln!("Error concatenating directory tree: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
