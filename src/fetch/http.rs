//! HTTP results fetcher backed by reqwest.

use super::ResultsFetcher;
use crate::model::{FetchError, FilterState, ResultsPage};
use reqwest::{Client, Url};
use std::error::Error as _;
use std::time::Duration;
use tracing::{debug, warn};

/// Fetches result pages with `GET <base_url>?startDate=..&endDate=..&...`.
#[derive(Debug, Clone)]
pub struct HttpResultsFetcher {
    client: Client,
    base_url: Url,
}

impl HttpResultsFetcher {
    /// Build a fetcher for `base_url`.
    ///
    /// `timeout` bounds each whole request; `None` waits indefinitely.
    ///
    /// # Errors
    ///
    /// Returns the reqwest error if the client (TLS backend) cannot be built.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// The request URL for `filters`: the base URL plus every filter field.
    ///
    /// Query parameters already present on the base URL are kept.
    pub fn request_url(&self, filters: &FilterState) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().extend_pairs(filters.query_pairs());
        url
    }
}

impl ResultsFetcher for HttpResultsFetcher {
    async fn fetch(&self, filters: &FilterState) -> Result<ResultsPage, FetchError> {
        let url = self.request_url(filters);
        debug!(%url, "GET results");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Network(describe(&err)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Results request rejected");
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::Network(describe(&err)))?;

        decode_page(&body)
    }
}

/// Decode a response body into a results page.
///
/// # Errors
///
/// Returns `FetchError::Decode` when the body is not the expected JSON shape.
pub fn decode_page(body: &[u8]) -> Result<ResultsPage, FetchError> {
    serde_json::from_slice(body).map_err(|err| FetchError::Decode(err.to_string()))
}

/// Flatten a reqwest error and its sources into one line.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
