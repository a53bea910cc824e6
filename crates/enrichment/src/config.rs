use std::time::Duration;

/// Public agify.io endpoint.
pub const DEFAULT_AGE_URL: &str = "https://api.agify.io/";

/// Public genderize.io endpoint.
pub const DEFAULT_GENDER_URL: &str = "https://api.genderize.io/";

/// Public nationalize.io endpoint.
pub const DEFAULT_NATIONALITY_URL: &str = "https://api.nationalize.io/";

/// Per-lookup timeout in seconds.
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 5;

/// Endpoints and timeout for the three name lookups.
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    pub age_url: String,
    pub gender_url: String,
    pub nationality_url: String,
    /// Bound on each individual lookup, not on the whole enrichment run.
    pub timeout: Duration,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            age_url: DEFAULT_AGE_URL.into(),
            gender_url: DEFAULT_GENDER_URL.into(),
            nationality_url: DEFAULT_NATIONALITY_URL.into(),
            timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        }
    }
}

impl EnrichmentConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                        |
    /// |--------------------------|--------------------------------|
    /// | `AGE_LOOKUP_URL`         | `https://api.agify.io/`        |
    /// | `GENDER_LOOKUP_URL`      | `https://api.genderize.io/`    |
    /// | `NATIONALITY_LOOKUP_URL` | `https://api.nationalize.io/`  |
    /// | `LOOKUP_TIMEOUT_SECS`    | `5`                            |
    pub fn from_env() -> Self {
        let age_url = std::env::var("AGE_LOOKUP_URL").unwrap_or_else(|_| DEFAULT_AGE_URL.into());
        let gender_url =
            std::env::var("GENDER_LOOKUP_URL").unwrap_or_else(|_| DEFAULT_GENDER_URL.into());
        let nationality_url = std::env::var("NATIONALITY_LOOKUP_URL")
            .unwrap_or_else(|_| DEFAULT_NATIONALITY_URL.into());

        let timeout_secs: u64 = std::env::var("LOOKUP_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_LOOKUP_TIMEOUT_SECS.to_string())
            .parse()
            .expect("LOOKUP_TIMEOUT_SECS must be a valid u64");

        Self {
            age_url,
            gender_url,
            nationality_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_services() {
        let config = EnrichmentConfig::default();
        assert_eq!(config.age_url, "https://api.agify.io/");
        assert_eq!(config.gender_url, "https://api.genderize.io/");
        assert_eq!(config.nationality_url, "https://api.nationalize.io/");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
