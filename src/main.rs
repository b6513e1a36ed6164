#![forbid(unsafe_code)]
//! # Text Profile CLI
//!
//! Command-line interface for the `text_profile` crate. It reads one UTF-8
//! `.txt` file and renders its profile: word statistics, grammar statistics with a
//! bar chart, a word cloud and a sentiment score.
//!
//! ## Example
//! ```bash
//! cargo run --release -- path/to/notes.txt --export-format html --out-dir reports
//! ```
//!
//! Set `RUST_LOG=debug` for stage timings. See `--help` for all available options.

use clap::Parser;
use log::error;
use std::path::PathBuf;
use std::process;
use text_profile::{AnalysisOptions, CloudOptions, ExportFormat, Resources, analyze_path};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Text file to analyze (.txt, UTF-8)
    path: PathBuf,

    /// Optional path to additional stopword file (.txt, one word per line)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Output format for export (html, json, csv, tsv, txt)
    #[arg(long, default_value = "html")]
    export_format: ExportFormat,

    /// Directory for exported files (default: current directory)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Maximum number of words drawn in the word cloud
    #[arg(long, default_value_t = 200)]
    max_words: usize,

    /// Word-cloud canvas width in pixels
    #[arg(long, default_value_t = 800)]
    cloud_width: u32,

    /// Word-cloud canvas height in pixels
    #[arg(long, default_value_t = 400)]
    cloud_height: u32,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Resources are loaded once, before any document is touched.
    let resources = match Resources::load(cli.stopwords.as_deref()) {
        Ok(resources) => resources,
        Err(e) => {
            error!("Setup failed: {}", e);
            process::exit(e.exit_code());
        }
    };

    let options = AnalysisOptions {
        export_format: cli.export_format,
        cloud: CloudOptions {
            width: cli.cloud_width,
            height: cli.cloud_height,
            max_words: cli.max_words,
            ..CloudOptions::default()
        },
        out_dir: cli.out_dir,
    };

    match analyze_path(&cli.path, &resources, &options) {
        Ok(outcome) => {
            println!("{}", outcome.result);
            for path in &outcome.exported {
                println!("Exported: {}", path.display());
            }
        }
        Err(e) => {
            error!("Error analyzing {}: {}", cli.path.display(), e);
            process::exit(e.exit_code());
        }
    }
}
