//! Name lookup seam and its reqwest-backed implementation.

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::EnrichmentConfig;
use crate::dto::{AgeResponse, GenderResponse, NationalityResponse};
use crate::error::LookupError;

/// The three inference services, in the order enrichment queries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Age,
    Gender,
    Nationality,
}

impl LookupKind {
    /// Stable lowercase label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            LookupKind::Age => "age",
            LookupKind::Gender => "gender",
            LookupKind::Nationality => "nationality",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Source of name-based inferences.
///
/// Each call is a single attempt; implementations must not retry.
#[async_trait]
pub trait NameLookup: Send + Sync {
    async fn age(&self, name: &str) -> Result<AgeResponse, LookupError>;
    async fn gender(&self, name: &str) -> Result<GenderResponse, LookupError>;
    async fn nationality(&self, name: &str) -> Result<NationalityResponse, LookupError>;
}

/// Queries the public lookup services over HTTP.
pub struct HttpNameLookup {
    client: reqwest::Client,
    age_url: String,
    gender_url: String,
    nationality_url: String,
}

impl HttpNameLookup {
    /// Build a lookup client whose requests are bounded by `config.timeout`.
    pub fn new(config: &EnrichmentConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Reuse an existing [`reqwest::Client`]. Its timeout settings apply.
    pub fn with_client(client: reqwest::Client, config: &EnrichmentConfig) -> Self {
        Self {
            client,
            age_url: config.age_url.clone(),
            gender_url: config.gender_url.clone(),
            nationality_url: config.nationality_url.clone(),
        }
    }

    fn endpoint(&self, kind: LookupKind) -> &str {
        match kind {
            LookupKind::Age => &self.age_url,
            LookupKind::Gender => &self.gender_url,
            LookupKind::Nationality => &self.nationality_url,
        }
    }

    /// GET `{endpoint}?name={name}` and decode a 200 body as `T`.
    ///
    /// The name goes into the URL as given; it is not trimmed or escaped.
    async fn fetch<T: DeserializeOwned>(
        &self,
        kind: LookupKind,
        name: &str,
    ) -> Result<T, LookupError> {
        let url = lookup_url(self.endpoint(kind), name);
        tracing::debug!(lookup = %kind, %url, "Sending lookup request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(LookupError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed = serde_json::from_slice(&body)?;
        tracing::debug!(lookup = %kind, %url, "Lookup responded");
        Ok(parsed)
    }
}

#[async_trait]
impl NameLookup for HttpNameLookup {
    async fn age(&self, name: &str) -> Result<AgeResponse, LookupError> {
        self.fetch(LookupKind::Age, name).await
    }

    async fn gender(&self, name: &str) -> Result<GenderResponse, LookupError> {
        self.fetch(LookupKind::Gender, name).await
    }

    async fn nationality(&self, name: &str) -> Result<NationalityResponse, LookupError> {
        self.fetch(LookupKind::Nationality, name).await
    }
}

fn lookup_url(endpoint: &str, name: &str) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{separator}name={name}")
}
