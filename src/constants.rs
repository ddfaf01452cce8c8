use once_cell::sync::Lazy;
use regex::Regex;

pub const SITE_DOMAIN: &str = "wired.com";
pub const SITE_FOLDER: &str = "Wired";
pub const DOCUMENTS_FOLDER: &str = "Documents";
pub const FILE_EXTENSION: &str = "txt";

pub const MAX_FILENAME_LEN: usize = 100;
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

pub const TEXT_BLOCK_TAGS: [&str; 7] = ["p", "h1", "h2", "h3", "h4", "h5", "h6"];
pub const CONTENT_CLASS_MARKERS: [&str; 3] = ["article-body", "content", "post-body"];
pub const BLOCK_SEPARATOR: &str = "\n\n";

pub static FORBIDDEN_FILENAME_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[<>:"/\\|?*]"#).expect("FORBIDDEN_FILENAME_CHARS regex")
});
// ASCII only: `\s` would also match unicode spaces
pub static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\t\n\x0C\r ]+"#).expect("WHITESPACE_RUN regex"));
