use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("'{0}' is not a valid Wired.com article URL")]
    Validation(String),
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to fetch URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("failed to fetch URL: {0}")]
    Http(#[source] reqwest::Error),
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to parse HTML: {0}")]
    Xml(String),
    #[error("failed to get home directory")]
    HomeDir,
    #[error("failed to create directory '{}': {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create file '{}': {source}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {part}: {source}")]
    Write {
        part: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// The pipeline stage a [`DownloadError`] belongs to.
#[derive(Error, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    #[error("validating URL")]
    Validation,
    #[error("fetching article")]
    Fetch,
    #[error("parsing article")]
    Parse,
    #[error("creating Wired folder")]
    Directory,
    #[error("saving article")]
    Write,
}

impl DownloadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Client(_) | Self::Url(_) | Self::Http(_) | Self::Status(_) => ErrorKind::Fetch,
            Self::Xml(_) => ErrorKind::Parse,
            Self::HomeDir | Self::Directory { .. } => ErrorKind::Directory,
            Self::CreateFile { .. } | Self::Write { .. } => ErrorKind::Write,
        }
    }
}
