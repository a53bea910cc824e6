//! Response shapes of the three lookup services.
//!
//! Only the fields the enrichment uses are modelled; everything else in the
//! payload (`count`, `name`, `probability` on genderize, ...) is ignored.
//! `null` and missing values deserialize to "no data" rather than failing.

use serde::Deserialize;

/// `GET https://api.agify.io/?name=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgeResponse {
    pub age: Option<i32>,
}

impl AgeResponse {
    /// The inferred age, if the service produced a non-zero one.
    pub fn age(&self) -> Option<i32> {
        self.age.filter(|age| *age != 0)
    }
}

/// `GET https://api.genderize.io/?name=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenderResponse {
    pub gender: Option<String>,
}

impl GenderResponse {
    /// The inferred gender, if the service produced a non-empty one.
    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref().filter(|gender| !gender.is_empty())
    }
}

/// `GET https://api.nationalize.io/?name=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NationalityResponse {
    pub country: Option<Vec<CountryProbability>>,
}

/// One candidate country with its probability.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryProbability {
    #[serde(alias = "country_code")]
    pub country_id: String,
    #[serde(default)]
    pub probability: Option<f64>,
}

impl NationalityResponse {
    /// The first listed country code.
    ///
    /// The service's ordering is taken as-is; probabilities are not compared.
    pub fn first_country(&self) -> Option<&str> {
        self.country
            .as_deref()
            .and_then(|countries| countries.first())
            .map(|c| c.country_id.as_str())
    }
}
