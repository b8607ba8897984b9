use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lexfind",
    about = "Lexical search over a legal article collection",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a collection
    Search {
        /// Query text ("25", "Article 25", "\"fair trial\"", "fair trial")
        query: String,

        /// Path to the collection JSON file
        #[arg(short, long)]
        collection: PathBuf,

        /// Use the approximate-matching backend instead of exact matching
        #[arg(long)]
        fuzzy: bool,

        /// Keep only articles whose chapter contains this substring
        #[arg(long)]
        chapter: Option<String>,

        /// Keep only articles whose part contains this substring
        #[arg(long)]
        part: Option<String>,

        /// Keep only articles with a tag containing this substring
        /// (repeatable, any-of)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Keep only articles from this exact source
        #[arg(long)]
        source: Option<String>,

        /// Maximum number of results to print
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Show collection statistics
    Inspect {
        /// Path to the collection JSON file
        collection: PathBuf,
    },
}
