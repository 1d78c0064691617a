use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "keepmd",
    bin_name = "keepmd",
    version,
    about = "Converts Google Keep notes exported with Takeout into Markdown files",
    long_about = None
)]
pub struct Cli {
    /// The path of the Keep archive to convert
    #[arg(long, default_value = ".", help_heading = "Paths")]
    pub source_path: PathBuf,

    /// The path to create the converted folder in
    #[arg(long, default_value = ".", help_heading = "Paths")]
    pub target_path: PathBuf,

    /// Name of the folder of converted notes, created inside --target-path
    #[arg(long, help_heading = "Paths")]
    pub folder_name: String,

    /// Convert trashed notes
    #[arg(long, help_heading = "Conversion")]
    pub convert_trashed: bool,

    /// Convert archived notes
    #[arg(long, help_heading = "Conversion")]
    pub convert_archived: bool,

    /// Don't convert note colors into tags
    #[arg(long, help_heading = "Conversion")]
    pub no_color_tags: bool,

    /// Parent tag for nested tags, e.g. "keep" gives #keep/errands
    #[arg(long, alias = "super-tag", value_name = "TAG", help_heading = "Conversion")]
    pub tag_prefix: Option<String>,

    /// Overwrite already converted notes
    #[arg(long, help_heading = "Conversion")]
    pub overwrite: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputMode::Text, help_heading = "Options")]
    pub output: OutputMode,

    /// Verbose logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
