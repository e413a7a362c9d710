//! HTTP access to the company directory API

use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{company::decode_page, Company, CompanyQuery};

/// Errors that can occur while fetching a page
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FetchError {
    /// The request never produced a response (offline, DNS, timeout, ...)
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status
    #[error("unexpected response status {status}")]
    Response { status: u16 },
    /// The body was not a JSON array of companies
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// The single message shown to the user for every kind of fetch failure
    pub fn user_message(&self) -> &'static str {
        "Failed to fetch companies"
    }
}

pub type FetchFuture<'a> = BoxFuture<'a, Result<Vec<Company>, FetchError>>;

/// A source of company pages
pub trait CompanySource: Send + Sync {
    fn fetch_page<'a>(&'a self, query: &'a CompanyQuery) -> FetchFuture<'a>;
}

/// `GET {base}/companies?page=..&limit=..[&name=..][&country=..][&industry=..]`
#[derive(Debug, Clone)]
pub struct HttpCompanySource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCompanySource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn page_url(&self, query: &CompanyQuery) -> String {
        format!(
            "{}/companies?{}",
            self.base_url.trim_end_matches('/'),
            query.to_query_string()
        )
    }
}

impl CompanySource for HttpCompanySource {
    fn fetch_page<'a>(&'a self, query: &'a CompanyQuery) -> FetchFuture<'a> {
        async move {
            let url = self.page_url(query);
            tracing::debug!(%url, page = query.page, "fetching companies");

            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                tracing::warn!(%url, status = status.as_u16(), "company request rejected");
                return Err(FetchError::Response {
                    status: status.as_u16(),
                });
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            decode_page(&body).map_err(|e| FetchError::Decode(e.to_string()))
        }
        .boxed()
    }
}
