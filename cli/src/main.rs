//! doctext CLI - render Doctor report trees as aligned plain text
//!
//! The document source is a serde-serialized `HtmlNode` tree (JSON) read
//! from a file or stdin; live HTML acquisition stays with the caller.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use doctext::{
    doctor_json, run_doctor, HtmlNode, JsonFormat, MessageLevel, Messenger, Presenter,
    PreviewOptions,
};

#[derive(Parser)]
#[command(name = "doctext")]
#[command(version)]
#[command(about = "Render diagnostic-report HTML trees as aligned plain text", long_about = None)]
struct Cli {
    /// Input node-tree file (stdin if not specified)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the report as aligned plain text (default)
    Text {
        /// Input node-tree file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Render the classified report as JSON
    Json {
        /// Input node-tree file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },
}

/// Presenter that writes the preview lines to stdout.
struct StdoutPresenter;

impl Presenter for StdoutPresenter {
    fn preview(&self, lines: &[String], _options: &PreviewOptions) {
        for line in lines {
            println!("{}", line);
        }
    }
}

/// Messenger that writes notices to stderr.
struct StderrMessenger;

impl Messenger for StderrMessenger {
    fn notify(&self, message: &str, level: MessageLevel) {
        eprintln!("{}: {}", level, message);
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Text { input }) => render_text(input),
        Some(Commands::Json { input, compact }) => render_json(input, compact),
        None => render_text(cli.input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn render_text(input: Option<PathBuf>) -> doctext::Result<()> {
    // A source that fails to produce a tree is the absent-document path:
    // one notice, no preview, successful exit.
    let root = load_document(input);
    run_doctor(root.as_ref(), &StdoutPresenter, &StderrMessenger)
}

fn render_json(input: Option<PathBuf>, compact: bool) -> doctext::Result<()> {
    let root = load_document(input).ok_or(doctext::Error::AbsentDocument)?;
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    println!("{}", doctor_json(&root, format)?);
    Ok(())
}

fn load_document(input: Option<PathBuf>) -> Option<HtmlNode> {
    let data = match input {
        Some(path) => fs::read_to_string(&path)
            .map_err(|e| log::error!("failed to read {}: {}", path.display(), e))
            .ok()?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| log::error!("failed to read stdin: {}", e))
                .ok()?;
            buf
        }
    };

    serde_json::from_str(&data)
        .map_err(|e| log::error!("failed to parse node tree: {}", e))
        .ok()
}
