use std::process::ExitCode;

use clap::Parser;

use libre_tl::cli::Args;
use libre_tl::cli::commands::translate::{self, TranslateOptions};
use libre_tl::output::{self, OutputConfig};
use libre_tl::ui::Style;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });

    let options = TranslateOptions {
        file: args.file,
        libretranslate_url: args.libretranslate_url,
        from: args.from,
        to: args.to,
        json: args.json,
        ini: args.ini,
        output: args.output,
        jobs: args.jobs,
    };

    match translate::run_translate(options).await {
        Ok(path) => {
            libre_tl::status!(
                "{} {}",
                Style::success("Translated file written to"),
                Style::value(path.display())
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {:#}", Style::error("Error:"), anyhow::Error::from(err));
            ExitCode::FAILURE
        }
    }
}
