use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "libre-tl")]
#[command(about = "Translate the values of JSON and INI files with LibreTranslate")]
#[command(version)]
pub struct Args {
    /// File to translate
    pub file: PathBuf,

    /// Base URL of the LibreTranslate server
    #[arg(long = "libretranslate-url", value_name = "URL")]
    pub libretranslate_url: Option<String>,

    /// Target language code (e.g., fr, de, ja)
    #[arg(short = 't', long = "to", value_name = "LANG")]
    pub to: Option<String>,

    /// Source language code [default: auto]
    #[arg(short = 'f', long = "from", value_name = "LANG")]
    pub from: Option<String>,

    /// Treat the input as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat the input as INI
    #[arg(long)]
    pub ini: bool,

    /// Output path [default: <name>_translated.<ext> next to the input]
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Concurrent requests within each JSON array or object (nested levels each get their own window)
    #[arg(short = 'j', long, default_value = "4")]
    pub jobs: NonZeroUsize,

    /// Suppress progress output
    #[arg(short = 'q', long)]
    pub quiet: bool,
}
