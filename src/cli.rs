use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::export::DEFAULT_EXPORT_FILE;

#[derive(Parser)]
#[command(name = "verse-search")]
#[command(about = "Search and read Jubilees, Jasher and Enoch", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/verse-search/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the book JSON files, overriding the config
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the MCP tools over stdio
    Serve,
    Search {
        query: String,
        #[arg(short, long)]
        book: Option<String>,
        #[arg(short, long)]
        whole_word: bool,
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    Chapter {
        book: String,
        chapter: u32,
        #[arg(short, long)]
        verse: Option<u32>,
        #[arg(short, long)]
        query: Option<String>,
    },
    Books,
    Export {
        query: String,
        #[arg(short, long)]
        book: Option<String>,
        #[arg(short, long)]
        whole_word: bool,
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },
}
