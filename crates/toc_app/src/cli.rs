use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use toc_logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "novel_toc", version, about = "Extract novel chapter lists and chapter text")]
pub struct Cli {
    /// RON configuration file with default selectors and fetch settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogTarget::Terminal, global = true)]
    pub log: LogTarget,

    /// Log debug details.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the chapters of a table-of-contents page.
    Toc(TocArgs),
    /// Fetch the titles and paragraph text of a single chapter page.
    Page(PageArgs),
}

#[derive(Debug, Args)]
pub struct TocArgs {
    pub url: String,

    /// Class carried by every chapter entry.
    #[arg(long = "class")]
    pub item_class: Option<String>,
}

#[derive(Debug, Args)]
pub struct PageArgs {
    pub url: String,

    #[arg(long)]
    pub title_class: Option<String>,

    #[arg(long)]
    pub content_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }
}
