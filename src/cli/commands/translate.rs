use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::error::Error;
use crate::job::TranslateJob;
use crate::translation::{LanguagePair, LibreTranslateClient};

pub struct TranslateOptions {
    pub file: PathBuf,
    pub libretranslate_url: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub json: bool,
    pub ini: bool,
    pub output: Option<PathBuf>,
    pub jobs: NonZeroUsize,
}

/// Translates one file and returns the path of the translated copy.
pub async fn run_translate(options: TranslateOptions) -> Result<PathBuf, Error> {
    let config = load_merged_config(&options)?;

    let job = TranslateJob::new(
        options.file,
        options.json,
        options.ini,
        LanguagePair::new(config.source_language, config.target_language),
        options.output,
        options.jobs,
    )?;

    let client = LibreTranslateClient::new(config.url, config.api_key);
    job.run(&client).await
}

fn load_merged_config(options: &TranslateOptions) -> anyhow::Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;

    resolve_config(
        &ResolveOptions {
            url: options.libretranslate_url.clone(),
            from: options.from.clone(),
            to: options.to.clone(),
        },
        &file_config,
    )
}
