use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Wired.com article Url
    #[arg(value_name = "URL")]
    pub url: String,

    /// Accepted for compatibility, never used
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,

    /// Turn debug logging on
    #[arg(short, long)]
    pub debug: bool,

    /// Directory to store the article in [default: ~/Documents/Wired]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Abort the request after this many seconds
    #[arg(short, long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Maximum number of redirects to follow, 0 disables redirects
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub max_redirects: usize,

    /// User-Agent header to send
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,
}
