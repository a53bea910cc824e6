/// Why a single lookup produced no usable response.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The request itself failed (connect, DNS, TLS, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The lookup answered with something other than 200 OK.
    #[error("Lookup returned HTTP {0}")]
    HttpStatus(u16),

    /// The body was not the expected JSON shape.
    #[error("Malformed lookup response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LookupError {
    /// Whether the failure was the per-request timeout firing.
    pub fn is_timeout(&self) -> bool {
        matches!(self, LookupError::Request(e) if e.is_timeout())
    }
}
