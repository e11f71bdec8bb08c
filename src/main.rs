use clap::Parser;
use std::process::ExitCode;
use steam_tag_snagger::prompt::{self, OutputFormat};
use steam_tag_snagger::{Extractor, SnaggerConfig};
use tokio::io::BufReader;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match SnaggerConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => SnaggerConfig::default(),
    };
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }

    let extractor = match Extractor::new(&config) {
        Ok(extractor) => extractor,
        Err(e) => {
            ::log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    ::log::info!("Ready, request timeout {:?}", extractor.timeout());

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    match prompt::run(stdin, &mut stdout, &extractor, format).await {
        Ok(handled) => {
            ::log::info!("Handled {} URLs", handled);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Console I/O failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
