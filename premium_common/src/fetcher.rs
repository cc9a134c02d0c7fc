//! Fetching JSON documents from upstream services.
//!
//! `JsonFetcher` is the seam between the accessors and the network. The
//! production implementation, `HttpFetcher`, performs a blocking GET with
//! `reqwest`; tests substitute a canned in-memory fetcher.
use log::{debug, error};
use reqwest::blocking::Client;
use serde_json::Value;

use crate::Result;
use crate::error::PremiumError;

/// Performs a GET request and returns the body decoded as JSON.
pub trait JsonFetcher {
    /// Fetches `url` with the given extra `headers`.
    ///
    /// Non-success HTTP statuses are errors, as are transport and JSON decoding
    /// failures.
    fn get_json(&self, url: &str, headers: &[(&str, &str)]) -> Result<Value>;
}

/// Blocking HTTP implementation of [`JsonFetcher`].
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher with the library's default client settings.
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(HttpFetcher { client })
    }
}

impl JsonFetcher for HttpFetcher {
    fn get_json(&self, url: &str, headers: &[(&str, &str)]) -> Result<Value> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        debug!("GET {}", url);
        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(PremiumError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text()?;
        let json = serde_json::from_str(&body)?;
        Ok(json)
    }
}

/// Fetches `url` and swallows any failure.
///
/// Errors are logged together with the URL and turned into `None`, so callers
/// only have to deal with absence.
pub fn fetch_data<F>(fetcher: &F, url: &str, headers: &[(&str, &str)]) -> Option<Value>
where
    F: JsonFetcher + ?Sized,
{
    match fetcher.get_json(url, headers) {
        Ok(json) => Some(json),
        Err(e) => {
            error!("API request error [{}]: {}", url, e);
            None
        }
    }
}
