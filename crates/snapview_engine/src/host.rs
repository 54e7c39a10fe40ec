use std::io;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("refusing to open {scheme}: url externally")]
    UnsupportedScheme { scheme: String },
    #[error("failed to launch browser: {0}")]
    Launch(#[from] io::Error),
}

/// Host environment the preview escapes to.
pub trait Host: Send + Sync {
    /// Opens an absolute URL in a new top-level context. Fire-and-forget.
    fn open_external(&self, url: &str) -> Result<(), HostError>;
}

/// Opens URLs in the user's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl Host for SystemBrowser {
    fn open_external(&self, url: &str) -> Result<(), HostError> {
        let url = validate_external_url(url)?;
        webbrowser::open(url.as_str())?;
        Ok(())
    }
}

/// Only absolute http(s) URLs leave the app.
pub fn validate_external_url(raw: &str) -> Result<Url, HostError> {
    let url = Url::parse(raw).map_err(|err| HostError::InvalidUrl(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(HostError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}
