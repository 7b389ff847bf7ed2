//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "momo")]
#[command(about = "Terminal photo journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add a new entry
    Add {
        /// Entry text
        text: Option<String>,

        /// Photo to attach; downsized and re-encoded on save
        #[arg(long)]
        image: Option<PathBuf>,

        /// Entry date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Where this happened
        #[arg(long)]
        location: Option<String>,

        /// Mood id (see 'momo moods')
        #[arg(long)]
        mood: Option<String>,

        /// Tag for the entry (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Ask the caption service to write the text
        #[arg(long)]
        suggest: bool,
    },

    /// Edit an existing entry; omitted fields keep their current value
    Edit {
        /// Entry id (see 'momo list')
        id: u64,

        #[arg(long)]
        text: Option<String>,

        /// Replace the attached photo
        #[arg(long)]
        image: Option<PathBuf>,

        /// Drop the attached photo
        #[arg(long)]
        remove_image: bool,

        /// Entry date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        location: Option<String>,

        /// Mood id (see 'momo moods')
        #[arg(long)]
        mood: Option<String>,

        /// Replace the tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id (see 'momo list')
        id: u64,
    },

    /// Show entries, newest first
    List {
        /// Search text, location, and tags
        #[arg(short, long)]
        search: Option<String>,

        /// Only entries on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the month grid
    Calendar {
        /// Month to show (YYYY-MM, default: current month)
        #[arg(long)]
        month: Option<String>,

        /// Select a date; the list under the grid shows only that day
        #[arg(long)]
        select: Option<String>,
    },

    /// Show photo entries, newest first
    Gallery,

    /// List the ten moods
    Moods,

    /// Write the whole journal as a JSON document
    Export {
        /// Destination file (default: stdout)
        file: Option<PathBuf>,
    },

    /// Replace the whole journal from a JSON export
    Import {
        /// Document written by 'momo export'
        file: PathBuf,

        /// Confirm replacing every entry
        #[arg(long)]
        yes: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
