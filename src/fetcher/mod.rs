#[cfg(test)]
mod tests;

use crate::article::Article;
use crate::config::FetchConfig;
use crate::error::DownloadError;
use crate::extractor::ContentExtractor;
use libxml::parser::Parser;
use libxml::tree::Document;
use log::{debug, error, info, warn};
use reqwest::blocking::Client;
use reqwest::StatusCode;

pub struct ArticleFetcher {
    client: Client,
}

impl ArticleFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, DownloadError> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .redirect(config.redirect_policy());

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        let client = builder.build().map_err(|err| {
            error!("Building HTTP client failed - '{}'", err);
            DownloadError::Client(err)
        })?;

        Ok(Self { client })
    }

    pub fn fetch(&self, url: &str) -> Result<Article, DownloadError> {
        info!("Fetching article: '{}'", url);

        let html = self.download(url)?;
        let content = if html.trim().is_empty() {
            warn!("Empty response body for '{}'", url);
            String::new()
        } else {
            let document = Self::parse_html(&html)?;
            ContentExtractor::extract(&document)
        };

        let title = Self::extract_title(url).to_owned();
        debug!(
            "Extracted {} bytes of text for article '{}'",
            content.len(),
            title
        );

        Ok(Article { title, content })
    }

    pub fn download(&self, url: &str) -> Result<String, DownloadError> {
        let url = url::Url::parse(url).map_err(|err| {
            error!("Invalid url '{}' - '{}'", url, err);
            err
        })?;

        let response = self.client.get(url.clone()).send().map_err(|err| {
            error!("Downloading HTML failed: GET '{}' - '{}'", url.as_str(), err);
            DownloadError::Http(err)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("GET '{}' answered with '{}'", url.as_str(), status);
            return Err(DownloadError::Status(status));
        }

        let html = response.text().map_err(|err| {
            error!("Reading response body of '{}' failed - '{}'", url.as_str(), err);
            DownloadError::Http(err)
        })?;
        debug!("Downloaded {} bytes from '{}'", html.len(), url.as_str());

        Ok(html)
    }

    pub fn parse_html(html: &str) -> Result<Document, DownloadError> {
        let parser = Parser::default_html();
        parser.parse_string(html).map_err(|err| {
            error!("Parsing HTML failed for downloaded HTML {:?}", err);
            DownloadError::Xml(format!("{err:?}"))
        })
    }

    /// The "title" is the last non-empty path segment of the URL, taken
    /// verbatim: no percent decoding, query and extension stay attached.
    pub fn extract_title(url: &str) -> &str {
        url.split('/')
            .rev()
            .find(|segment| !segment.is_empty())
            .unwrap_or(url)
    }
}
