use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::domain::OrcidId;
use crate::error::BibError;
use crate::work::WorksResponse;

pub const DEFAULT_API_BASE: &str = "https://pub.orcid.org/v3.0";

pub trait OrcidClient: Send + Sync {
    fn fetch_work_summaries(&self, id: &OrcidId) -> Result<WorksResponse, BibError>;
    fn fetch_work(&self, id: &OrcidId, put_code: u64) -> Result<Value, BibError>;
}

#[derive(Clone)]
pub struct OrcidHttpClient {
    client: Client,
    api_base: String,
}

impl OrcidHttpClient {
    pub fn new(api_base: &str) -> Result<Self, BibError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("orcid-bib/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| BibError::OrcidHttp(err.to_string()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| BibError::OrcidHttp(err.to_string()))?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn works_url(&self, id: &OrcidId) -> String {
        format!("{}/{}/works", self.api_base, id.as_str())
    }

    pub fn work_url(&self, id: &OrcidId, put_code: u64) -> String {
        format!("{}/{}/work/{}", self.api_base, id.as_str(), put_code)
    }

    fn get_json(&self, url: &str) -> Result<Value, BibError> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| BibError::OrcidHttp(err.to_string()))?;
        let response = Self::handle_status(response)?;
        response
            .json()
            .map_err(|err| BibError::OrcidResponse(err.to_string()))
    }

    fn handle_status(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, BibError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .text()
            .unwrap_or_else(|_| "ORCID request failed".to_string());
        Err(BibError::OrcidStatus { status, message })
    }
}

impl OrcidClient for OrcidHttpClient {
    fn fetch_work_summaries(&self, id: &OrcidId) -> Result<WorksResponse, BibError> {
        let raw = self.get_json(&self.works_url(id))?;
        serde_json::from_value(raw).map_err(|err| BibError::OrcidResponse(err.to_string()))
    }

    fn fetch_work(&self, id: &OrcidId, put_code: u64) -> Result<Value, BibError> {
        self.get_json(&self.work_url(id, put_code))
    }
}

/// Fetches every work detail record for `id`, one request at a time.
///
/// The first failed request aborts the whole fetch.
pub fn fetch_works<C: OrcidClient + ?Sized>(
    client: &C,
    id: &OrcidId,
) -> Result<Vec<Value>, BibError> {
    let summaries = client.fetch_work_summaries(id)?;
    summaries
        .put_codes()
        .into_iter()
        .map(|put_code| client.fetch_work(id, put_code))
        .collect()
}
