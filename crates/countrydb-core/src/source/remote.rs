// crates/countrydb-core/src/source/remote.rs

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::RemoteError;
use crate::model::{self, CountriesRaw, Country};

/// Public REST Countries v3.1 service.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Client for the remote country-reference service.
///
/// Read-only; two endpoints are consumed: the full collection (`/all`) and a
/// single record by 3-letter code (`/alpha/{code}`). Any failure — transport,
/// non-success status, malformed body, empty by-code reply — is reported as a
/// [`RemoteError`] for the gateway to branch on.
#[derive(Clone, Debug)]
pub struct RemoteSource {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteSource {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different service root. Used by tests to target
    /// a mock server; no trailing slash expected.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the full country collection.
    pub async fn fetch_all(&self) -> Result<Vec<Country>, RemoteError> {
        let raw: CountriesRaw = self.get_json(&format!("{}/all", self.base_url)).await?;
        Ok(model::from_raw(raw))
    }

    /// Fetch a single country by its 3-letter code.
    ///
    /// The alpha endpoint answers with a one-element array; an empty array is
    /// a failure for this endpoint, not a valid empty result.
    pub async fn fetch_by_code(&self, code: &str) -> Result<Country, RemoteError> {
        let url = format!("{}/alpha/{}", self.base_url, code);
        let mut raw: CountriesRaw = self.get_json(&url).await?;
        if raw.is_empty() {
            return Err(RemoteError::NoMatch(code.to_owned()));
        }
        Ok(model::country_from_raw(raw.remove(0)))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RemoteError> {
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self::new()
    }
}
