use crate::constants::{
    DOCUMENTS_FOLDER, FORBIDDEN_FILENAME_CHARS, MAX_FILENAME_LEN, SITE_DOMAIN, SITE_FOLDER,
    WHITESPACE_RUN,
};
use crate::error::DownloadError;
use log::debug;
use std::path::{Path, PathBuf};

pub struct Util;

impl Util {
    /// Turn an arbitrary title into a name that is safe to use as a file name.
    ///
    /// Strips `< > : " / \ | ? *`, squashes inner whitespace runs into `_` and
    /// caps the result at 100 bytes. The cut never splits a character.
    /// Leading and trailing whitespace is dropped, not turned into `_`.
    pub fn sanitize_filename(name: &str) -> String {
        let name = FORBIDDEN_FILENAME_CHARS.replace_all(name, "");
        let mut name = WHITESPACE_RUN.replace_all(name.trim(), "_").into_owned();

        if name.len() > MAX_FILENAME_LEN {
            let mut end = MAX_FILENAME_LEN;
            while !name.is_char_boundary(end) {
                end -= 1;
            }
            name.truncate(end);
        }

        name.trim().to_owned()
    }

    pub fn is_wired_url(url: &str) -> bool {
        url.contains(SITE_DOMAIN)
    }

    /// `<home>/Documents/Wired`
    pub fn default_folder() -> Result<PathBuf, DownloadError> {
        let home = dirs::home_dir().ok_or(DownloadError::HomeDir)?;
        Ok(home.join(DOCUMENTS_FOLDER).join(SITE_FOLDER))
    }

    /// Create `folder` and all of its parents. Succeeds if it already exists.
    /// Returns the absolute path of the folder.
    pub fn prepare_folder(folder: &Path) -> Result<PathBuf, DownloadError> {
        let folder = std::path::absolute(folder).map_err(|source| DownloadError::Directory {
            path: folder.to_path_buf(),
            source,
        })?;

        std::fs::create_dir_all(&folder).map_err(|source| DownloadError::Directory {
            path: folder.clone(),
            source,
        })?;

        debug!("Output folder ready: '{}'", folder.display());
        Ok(folder)
    }
}
