//! Download a Wired.com article and store its text in a plain text file.
//!
//! ```no_run
//! use wired_downloader::{FetchConfig, WiredDownloader};
//!
//! let downloader = WiredDownloader::new(&FetchConfig::default())?;
//! let path = downloader.download("https://www.wired.com/story/some-article/")?;
//! println!("{}", path.display());
//! # Ok::<(), wired_downloader::DownloadError>(())
//! ```

mod article;
mod config;
mod constants;
mod error;
mod extractor;
mod fetcher;
mod util;


pub use crate::article::Article;
pub use crate::config::FetchConfig;
pub use crate::error::{DownloadError, ErrorKind};
pub use crate::extractor::ContentExtractor;
pub use crate::fetcher::ArticleFetcher;
pub use crate::util::Util;

use log::{error, info};
use std::path::PathBuf;

pub struct WiredDownloader {
    fetcher: ArticleFetcher,
    folder: Option<PathBuf>,
}

impl WiredDownloader {
    pub fn new(config: &FetchConfig) -> Result<Self, DownloadError> {
        Ok(Self {
            fetcher: ArticleFetcher::new(config)?,
            folder: None,
        })
    }

    /// Store articles in `folder` instead of `<home>/Documents/Wired`.
    pub fn with_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    pub fn validate_url(url: &str) -> Result<(), DownloadError> {
        if Util::is_wired_url(url) {
            Ok(())
        } else {
            error!("Rejecting non Wired.com url '{}'", url);
            Err(DownloadError::Validation(url.to_owned()))
        }
    }

    /// Fetch `url` and write the article to `<folder>/<sanitized title>.txt`.
    /// Returns the absolute path of the written file.
    ///
    /// The folder is only created once the article was fetched successfully.
    pub fn download(&self, url: &str) -> Result<PathBuf, DownloadError> {
        Self::validate_url(url)?;

        let article = self.fetcher.fetch(url)?;

        let folder = match &self.folder {
            Some(folder) => Util::prepare_folder(folder)?,
            None => Util::prepare_folder(&Util::default_folder()?)?,
        };

        let path = folder.join(article.file_name());
        article.save_text(&path)?;
        info!("Saved '{}' to '{}'", article.title, path.display());

        Ok(path)
    }
}
