// src/cli/args.rs
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Base address of the notes API (optional)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes with id, title and a body preview
    List {
        /// Only show notes carrying all of these tags (repeatable)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Output the notes as JSON instead of rows
        #[arg(long)]
        json: bool,
    },

    /// View a single note
    View {
        /// Note ID to view
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Output the note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note and show it
    Create {
        #[arg(short, long, value_name = "TITLE")]
        title: String,

        #[arg(short, long, value_name = "BODY")]
        body: String,

        /// Comma-separated tags, e.g. "rust, http"
        #[arg(long, value_name = "TAGS", default_value = "")]
        tags: String,
    },

    /// Edit a note; omitted fields keep their current values
    Edit {
        /// Note ID to edit
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        #[arg(short, long, value_name = "TITLE")]
        title: Option<String>,

        #[arg(short, long, value_name = "BODY")]
        body: Option<String>,

        /// Comma-separated tags; replaces the full tag list
        #[arg(long, value_name = "TAGS")]
        tags: Option<String>,
    },

    /// Delete a note after confirmation
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Open a client route path directly, e.g. /notes/5/edit
    Open {
        #[arg(value_name = "PATH")]
        path: String,
    },
}
