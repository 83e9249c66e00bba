use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use draftsmith_export::formats::ExportKind;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "draftsmith")]
#[command(about = "Turn content briefs into drafts, posts and a reusable snippet library", long_about = None)]
pub struct Cli {
    /// Config file (default: platform config dir/draftsmith/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory, overriding the configured one
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a brief for completeness (defaults to the saved brief draft)
    Validate(ValidateArgs),
    /// Split a generated document into blog draft, LinkedIn post and footnotes
    Parse(ParseArgs),
    /// Save an extractor response to the snippet library
    Save(SaveArgs),
    /// List every snippet set in the library
    List,
    /// Filter the library by title/tag text and tags
    Search(SearchArgs),
    /// List every tag in the library
    Tags,
    /// Delete a snippet set
    Delete(DeleteArgs),
    /// Write a snippet set (saved, or straight from the extractor) as hooks CSV,
    /// snippets JSON or quotes text
    Export(ExportArgs),
    /// Manage the in-progress brief
    Brief(BriefArgs),
    /// Show or create the config file
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Brief JSON file
    pub brief: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Raw generated document
    pub raw: PathBuf,

    /// Print the sections re-rendered as one markdown document
    #[arg(long)]
    pub bundle: bool,

    /// Include word counts and reading times
    #[arg(long, conflicts_with = "bundle")]
    pub stats: bool,

    /// Also write one markdown file per non-empty section into this directory
    #[arg(long)]
    pub sections_out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SaveArgs {
    /// Extractor response (JSON, possibly wrapped in prose)
    #[arg(long)]
    pub snippets: PathBuf,

    /// The generated document the snippets were extracted from
    #[arg(long)]
    pub source: PathBuf,

    /// Brief JSON file (defaults to the saved brief draft)
    #[arg(long)]
    pub brief: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive text matched against titles and tags
    #[arg(long, default_value = "")]
    pub term: String,

    /// Only sets carrying at least one of these tags (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: Uuid,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// hooks, snippets or quotes
    pub kind: ExportKind,

    /// Saved snippet set to export
    #[arg(required_unless_present = "snippets", conflicts_with = "snippets")]
    pub id: Option<Uuid>,

    /// Export an extractor response directly, without saving it to the library
    #[arg(long)]
    pub snippets: Option<PathBuf>,

    /// Brief to embed in an unsaved export (defaults to the saved brief draft)
    #[arg(long, requires = "snippets")]
    pub brief: Option<PathBuf>,

    /// Output directory (default: configured export dir)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct BriefArgs {
    #[command(subcommand)]
    pub command: BriefCommand,
}

#[derive(Debug, Subcommand)]
pub enum BriefCommand {
    /// Store a brief JSON file as the current draft
    Save { file: PathBuf },
    /// Print the current draft and its validation
    Show,
    /// Forget the current draft
    Clear,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective config
    Show,
    /// Write a config file with defaults (and --data-dir if given)
    Init,
}
