//! Card Editor CLI
//!
//! Interactive editing of character cards and world info files, plus batch
//! normalization (load through the form model, save again).

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use card_editor::{init_logging, EditorConfig, EditorSession, Shell, View};

#[derive(Parser)]
#[command(name = "card-editor")]
#[command(about = "Character card and world info editor", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (TOML). Missing file means defaults.
    #[arg(short, long, global = true, default_value = "card-editor.toml")]
    config: PathBuf,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive editor (default)
    Shell,

    /// Re-save a character card through the editor
    NormalizeCard {
        input: PathBuf,
        output: PathBuf,
    },

    /// Re-save a world info file through the editor
    NormalizeWorld {
        input: PathBuf,
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = EditorConfig::load(&cli.config)?;
    let filter = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_logging(filter)?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            info!(view = %config.default_view, "starting shell");
            let stdin = io::stdin();
            let mut shell = Shell::new(config, stdin.lock(), io::stdout());
            shell.run().context("shell i/o failed")?;
        }
        Commands::NormalizeCard { input, output } => {
            normalize(View::Character, &input, &output)?;
        }
        Commands::NormalizeWorld { input, output } => {
            normalize(View::World, &input, &output)?;
        }
    }

    Ok(())
}

fn normalize(view: View, input: &Path, output: &Path) -> Result<()> {
    let kind = view.document_kind();
    let mut session = EditorSession::new(view);
    session.load(kind, input)?;
    session.save(kind, output)?;
    println!("{kind} written to {}", output.display());
    Ok(())
}
