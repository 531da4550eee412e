// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (list, view, create, or browse)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes for a tag, optionally filtered by search text
    List {
        /// Tag to filter by ("all" lists every tag)
        #[arg(value_name = "TAG", default_value = "all")]
        tag: String,

        /// Search text applied to title and content
        #[arg(short, long, value_name = "SEARCH")]
        search: Option<String>,

        /// Page number (starts at 1)
        #[arg(short, long, value_name = "PAGE", default_value_t = 1)]
        page: u32,

        /// Output the page as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// View a single note
    View {
        /// Note ID to view
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Output note as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Create a note
    Create {
        /// Note title (3-50 characters)
        #[arg(value_name = "TITLE")]
        title: String,

        /// Note content (up to 500 characters)
        #[arg(long, value_name = "CONTENT", default_value = "")]
        content: String,

        /// Note tag (Todo, Work, Personal, Meeting, Shopping)
        #[arg(long, value_name = "TAG", default_value = "Todo")]
        tag: String,
    },

    /// Browse notes interactively with live search
    Browse {
        /// Tag to start with ("all" lists every tag)
        #[arg(value_name = "TAG", default_value = "all")]
        tag: String,
    },
}
