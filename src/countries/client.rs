//! REST Countries client.
//!
//! One endpoint: `GET {base}/name/{term}`. The service answers with a JSON
//! array of matches, or a 404 carrying `{"status":404,"message":"Not Found"}`
//! when nothing matches.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{StatusCode, Url};

use super::source::{CountrySource, FetchError};
use super::types::{CountryRecord, SearchPayload};

pub struct RestCountriesClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestCountriesClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                reqwest::Client::new()
            });

        Self { base_url, client }
    }

    /// Builds `{base}/name/{term}` with the term percent-encoded as a single
    /// path segment.
    pub fn search_url(&self, term: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| FetchError::Config(format!("invalid base URL {:?}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::Config(format!("base URL cannot have a path: {}", self.base_url)))?
            .pop_if_empty()
            .push("name")
            .push(term);
        Ok(url)
    }
}

/// Maps a response body to records or a typed failure.
fn decode_body(status: StatusCode, body: &str) -> Result<Vec<CountryRecord>, FetchError> {
    if !status.is_success() {
        // A 404 carrying the service's own envelope is a clean "no match"
        if status == StatusCode::NOT_FOUND
            && let Ok(SearchPayload::Envelope(envelope)) = serde_json::from_str(body)
            && envelope.is_not_found()
        {
            return Err(FetchError::NotFound);
        }
        return Err(FetchError::Status {
            status: status.as_u16(),
            message: body.to_string(),
        });
    }

    match serde_json::from_str::<SearchPayload>(body) {
        Ok(SearchPayload::Countries(countries)) => Ok(countries),
        Ok(SearchPayload::Envelope(envelope)) if envelope.is_not_found() => {
            Err(FetchError::NotFound)
        }
        Ok(SearchPayload::Envelope(envelope)) => Err(FetchError::Decode(format!(
            "unexpected object payload: {}",
            envelope.message.unwrap_or_default()
        ))),
        Err(e) => Err(FetchError::Decode(e.to_string())),
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<CountryRecord>, FetchError> {
        let url = self.search_url(term)?;
        info!("Country search request: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        debug!("Country search response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let result = decode_body(status, &body);
        match &result {
            Ok(countries) => info!("Country search for {:?}: {} result(s)", term, countries.len()),
            Err(FetchError::NotFound) => info!("Country search for {:?}: no match", term),
            Err(e) => warn!("Country search for {:?} failed: {}", term, e),
        }
        result
    }
}
