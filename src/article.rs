use crate::constants::{BLOCK_SEPARATOR, FILE_EXTENSION};
use crate::error::DownloadError;
use crate::util::Util;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Last path segment of the article URL, not the headline of the page.
    pub title: String,
    pub content: String,
}

impl Article {
    pub fn file_name(&self) -> String {
        format!("{}.{}", Util::sanitize_filename(&self.title), FILE_EXTENSION)
    }

    /// Write `<title>\n\n<content>` to `path`, replacing any existing file.
    ///
    /// There is no write-then-rename step: a failing write can leave a
    /// truncated file behind.
    pub fn save_text(&self, path: &Path) -> Result<(), DownloadError> {
        let mut file = File::create(path).map_err(|source| DownloadError::CreateFile {
            path: path.to_path_buf(),
            source,
        })?;

        file.write_all(self.title.as_bytes())
            .and_then(|()| file.write_all(BLOCK_SEPARATOR.as_bytes()))
            .map_err(|source| DownloadError::Write {
                part: "title",
                source,
            })?;

        file.write_all(self.content.as_bytes())
            .map_err(|source| DownloadError::Write {
                part: "content",
                source,
            })?;

        Ok(())
    }
}
