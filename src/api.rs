//! Synchronous client for the **disease.sh COVID-19 API (v3)**.
//!
//! Two fixed endpoints are used: `/countries` (one record per country) and
//! `/all` (worldwide totals). No query parameters, no auth, no request body.
//! Each call is a single attempt; a failed fetch is reported to the caller
//! and the pipeline degrades to empty/default data rather than retrying.
//!
//! Typical usage:
//! ```no_run
//! # use covmap_rs::Client;
//! let client = Client::default();
//! let countries = client.fetch_countries()?;
//! let global = client.fetch_global()?;
//! # Ok::<(), covmap_rs::api::FetchError>(())
//! ```

use crate::models::{CountryStat, GlobalStats};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Why a fetch failed. Every variant carries the URL it was issued against.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never completed (DNS, connect, timeout, TLS).
    #[error("GET {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("GET {url}: HTTP {status}")]
    Status { url: String, status: StatusCode },
    /// The body was not the JSON shape we expected.
    #[error("GET {url}: decode response: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("covmap_rs/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://disease.sh/v3/covid-19".into(),
            http,
        }
    }
}

impl Client {
    /// Fetch the per-country records.
    ///
    /// ### Errors
    /// - Network/HTTP error
    /// - Non-2xx status
    /// - JSON decoding error
    pub fn fetch_countries(&self) -> Result<Vec<CountryStat>, FetchError> {
        self.get_json("countries")
    }

    /// Fetch the worldwide aggregate totals.
    pub fn fetch_global(&self) -> Result<GlobalStats, FetchError> {
        self.get_json("all")
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, path);
        let resp = self.http.get(&url).send().map_err(|e| FetchError::Transport {
            url: url.clone(),
            source: e,
        })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }
        resp.json().map_err(|e| FetchError::Decode { url, source: e })
    }
}
