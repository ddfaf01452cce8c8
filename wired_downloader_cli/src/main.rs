use std::process::exit;
use std::time::Duration;

use crate::args::Args;
use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use log::SetLoggerError;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use wired_downloader::{DownloadError, FetchConfig, WiredDownloader};

mod args;

pub fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => match error.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => error.exit(),
            _ => {
                if error.print().is_err() {
                    eprintln!("{error}");
                }
                exit(1);
            }
        },
    };

    // stdout only carries the result line
    if let Err(error) = init_logging(args.debug) {
        eprintln!("Failed to initialize logging: {error}");
    }

    if !args.ignored.is_empty() {
        log::debug!("Ignoring extra arguments: {:?}", args.ignored);
    }

    match download(&args) {
        Ok(path) => println!("Article saved to: {}", path.display()),
        Err(error) => {
            eprintln!("Error {}: {}", error.kind(), error);
            exit(1);
        }
    }
}

fn init_logging(debug: bool) -> Result<(), SetLoggerError> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}

fn download(args: &Args) -> Result<std::path::PathBuf, DownloadError> {
    let mut config = FetchConfig::default().with_max_redirects(args.max_redirects);
    if let Some(seconds) = args.timeout {
        config = config.with_timeout(Duration::from_secs(seconds));
    }
    if let Some(user_agent) = &args.user_agent {
        config = config.with_user_agent(user_agent.as_str());
    }

    // reject foreign urls before any client is built
    WiredDownloader::validate_url(&args.url)?;

    let mut downloader = WiredDownloader::new(&config)?;
    if let Some(output_dir) = &args.output_dir {
        downloader = downloader.with_folder(output_dir);
    }

    downloader.download(&args.url)
}
