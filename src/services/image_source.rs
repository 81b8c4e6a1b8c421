use pixel_filter::PixelBuffer;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::error::SourceError;
use crate::models::AppConfig;
use crate::rendering::decode_png;

/// Resolves an image identifier to a decoded pixel buffer
pub trait ImageSource: Send + Sync {
    fn load(&self, identifier: &str) -> Result<PixelBuffer, SourceError>;
}

/// Fetches PNG images over HTTP(S), subject to the configured origin policy.
///
/// Every redirect hop is checked against the policy before it is followed,
/// so a disallowed host is never contacted. Uses a blocking client built per
/// request; call `load` from a blocking context (e.g. `spawn_blocking`),
/// never directly on an async task.
pub struct HttpImageSource {
    config: Arc<AppConfig>,
}

const MAX_REDIRECTS: usize = 10;

/// Raised from the redirect policy when a hop leaves the allowed hosts
#[derive(Debug, Error)]
#[error("redirect to disallowed host {host}")]
struct BlockedRedirect {
    host: String,
}

impl HttpImageSource {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    fn check_host(&self, identifier: &str, url: &reqwest::Url) -> Result<(), SourceError> {
        let host = url.host_str().unwrap_or_default();
        if self.config.is_host_allowed(host) {
            Ok(())
        } else {
            tracing::warn!(identifier, host, "Blocked by origin policy");
            Err(SourceError::Policy {
                identifier: identifier.to_string(),
                host: host.to_string(),
            })
        }
    }

    fn redirect_policy(&self) -> reqwest::redirect::Policy {
        let config = Arc::clone(&self.config);
        reqwest::redirect::Policy::custom(move |attempt| {
            let host = attempt.url().host_str().unwrap_or_default().to_string();
            if !config.is_host_allowed(&host) {
                attempt.error(BlockedRedirect { host })
            } else if attempt.previous().len() > MAX_REDIRECTS {
                attempt.error("too many redirects")
            } else {
                attempt.follow()
            }
        })
    }

    /// Map a transport error, surfacing a blocked redirect as a policy error
    fn send_error(&self, identifier: &str, err: reqwest::Error) -> SourceError {
        let mut source = std::error::Error::source(&err);
        while let Some(e) = source {
            if let Some(blocked) = e.downcast_ref::<BlockedRedirect>() {
                tracing::warn!(identifier, host = %blocked.host, "Redirect blocked by origin policy");
                return SourceError::Policy {
                    identifier: identifier.to_string(),
                    host: blocked.host.clone(),
                };
            }
            source = e.source();
        }
        SourceError::load(identifier, err)
    }
}

impl ImageSource for HttpImageSource {
    fn load(&self, identifier: &str) -> Result<PixelBuffer, SourceError> {
        let url = reqwest::Url::parse(identifier)
            .map_err(|e| SourceError::load(identifier, format!("invalid URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SourceError::load(
                identifier,
                format!("unsupported scheme: {}", url.scheme()),
            ));
        }
        self.check_host(identifier, &url)?;

        tracing::debug!(url = %url, "Fetching remote image");

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(self.config.fetch_timeout_secs))
            .redirect(self.redirect_policy())
            .build()
            .map_err(|e| SourceError::load(identifier, format!("failed to build HTTP client: {e}")))?;

        let response = client
            .get(url)
            .send()
            .map_err(|e| self.send_error(identifier, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::load(identifier, format!("HTTP {status}")));
        }

        let max = self.config.max_source_bytes;
        if let Some(len) = response.content_length() {
            if len as usize > max {
                return Err(SourceError::TooLarge {
                    size: len as usize,
                    max,
                });
            }
        }

        // Bounded read; chunked responses carry no Content-Length
        let mut bytes = Vec::new();
        response
            .take(max as u64 + 1)
            .read_to_end(&mut bytes)
            .map_err(|e| SourceError::load(identifier, e))?;
        if bytes.len() > max {
            return Err(SourceError::TooLarge {
                size: bytes.len(),
                max,
            });
        }

        tracing::debug!(url = identifier, bytes = bytes.len(), "Fetched remote image");
        decode_png(&bytes, self.config.max_dimension)
    }
}

/// Reads PNG images from the local filesystem
pub struct FileImageSource {
    config: Arc<AppConfig>,
}

impl FileImageSource {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }
}

impl ImageSource for FileImageSource {
    fn load(&self, identifier: &str) -> Result<PixelBuffer, SourceError> {
        let path = PathBuf::from(identifier.strip_prefix("file://").unwrap_or(identifier));

        let max = self.config.max_source_bytes;
        let metadata = std::fs::metadata(&path).map_err(|e| SourceError::load(identifier, e))?;
        if metadata.len() as usize > max {
            return Err(SourceError::TooLarge {
                size: metadata.len() as usize,
                max,
            });
        }

        let bytes = std::fs::read(&path).map_err(|e| SourceError::load(identifier, e))?;
        decode_png(&bytes, self.config.max_dimension)
    }
}

/// Dispatches identifiers to the HTTP or file source by scheme.
///
/// A remote-only loader rejects local paths and `file://` identifiers.
pub struct ImageLoader {
    http: HttpImageSource,
    file: Option<FileImageSource>,
}

impl ImageLoader {
    /// Loader for remote URLs and local files
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            http: HttpImageSource::new(config.clone()),
            file: Some(FileImageSource::new(config)),
        }
    }

    /// Loader for remote URLs only
    pub fn remote_only(config: Arc<AppConfig>) -> Self {
        Self {
            http: HttpImageSource::new(config),
            file: None,
        }
    }
}

impl ImageSource for ImageLoader {
    fn load(&self, identifier: &str) -> Result<PixelBuffer, SourceError> {
        let lower = identifier.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return self.http.load(identifier);
        }
        match &self.file {
            Some(file) => file.load(identifier),
            None => {
                tracing::warn!(identifier, "Rejected local file source");
                Err(SourceError::LocalFile(identifier.to_string()))
            }
        }
    }
}
