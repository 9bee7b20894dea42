//! Subline CLI — command-line workspace for transcript timelines.
//!
//! Usage:
//!   subline init <NAME>            Create a transcript document
//!   subline info <PATH>            Show document information
//!   subline resolve <PATH> --at T  Resolve the active segment at a position
//!   subline search <PATH> <QUERY>  Filter segments by text or timecode
//!   subline script <PATH>          Project the voiceover script
//!   subline export <PATH>          Write SRT/VTT/plain captions
//!   subline edit <PATH> <ID>       Patch a segment's timing or text
//!   subline add <PATH>             Append a new segment
//!   subline check <PATH>           Report timing issues

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "subline",
    about = "Transcript timeline editing and caption export",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new transcript document
    Init {
        /// Document name
        name: String,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Start with no segments instead of the demo transcript
        #[arg(long)]
        empty: bool,

        /// Voice profile for script projection
        #[arg(long)]
        voice: Option<String>,
    },

    /// Show document information
    Info {
        /// Path to the transcript document
        path: PathBuf,
    },

    /// Resolve the active segment at a playhead position
    Resolve {
        /// Path to the transcript document
        path: PathBuf,

        /// Playhead position ("00:01:24" or plain seconds like "84")
        #[arg(long)]
        at: String,
    },

    /// Filter segments by text, timecode, or id
    Search {
        /// Path to the transcript document
        path: PathBuf,

        /// Query string
        query: String,
    },

    /// Project the voiceover script
    Script {
        /// Path to the transcript document
        path: PathBuf,

        /// Override the document's voice profile
        #[arg(long)]
        voice: Option<String>,
    },

    /// Export captions from the current document state
    Export {
        /// Path to the transcript document
        path: PathBuf,

        /// Output file path (format follows its extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format when --output is not given: srt, vtt, txt
        #[arg(long, default_value = "srt")]
        format: String,
    },

    /// Patch a segment's timing or text
    Edit {
        /// Path to the transcript document
        path: PathBuf,

        /// Segment id (e.g., seg_3)
        segment: String,

        /// New start timecode
        #[arg(long)]
        start: Option<String>,

        /// New end timecode
        #[arg(long)]
        end: Option<String>,

        /// New segment text
        #[arg(long)]
        text: Option<String>,
    },

    /// Append a new segment at the end of the timeline
    Add {
        /// Path to the transcript document
        path: PathBuf,
    },

    /// Report timing issues without changing anything
    Check {
        /// Path to the transcript document
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    subline_common::logging::init_logging(&subline_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Init {
            name,
            output,
            empty,
            voice,
        } => commands::init::run(name, output, empty, voice),
        Commands::Info { path } => commands::info::run(path),
        Commands::Resolve { path, at } => commands::resolve::run(path, at),
        Commands::Search { path, query } => commands::search::run(path, query),
        Commands::Script { path, voice } => commands::script::run(path, voice),
        Commands::Export {
            path,
            output,
            format,
        } => commands::export::run(path, output, format),
        Commands::Edit {
            path,
            segment,
            start,
            end,
            text,
        } => commands::edit::run(path, segment, start, end, text),
        Commands::Add { path } => commands::add::run(path),
        Commands::Check { path } => commands::check::run(path),
    }
}
