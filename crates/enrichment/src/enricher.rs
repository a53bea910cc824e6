//! Enrichment orchestration.

use std::sync::Arc;

use census_core::person::PersonDraft;

use crate::config::EnrichmentConfig;
use crate::error::LookupError;
use crate::lookup::{HttpNameLookup, LookupKind, NameLookup};
use crate::reporter::{EnrichmentReporter, TracingReporter};

/// Fills in age, gender and nationality on a [`PersonDraft`].
///
/// Lookups run one at a time (age, gender, nationality), each with a single
/// attempt. A failed lookup leaves its field untouched and does not affect
/// the others. Cheap to clone.
#[derive(Clone)]
pub struct Enricher {
    lookup: Arc<dyn NameLookup>,
    reporter: Arc<dyn EnrichmentReporter>,
}

impl Enricher {
    pub fn new(lookup: Arc<dyn NameLookup>, reporter: Arc<dyn EnrichmentReporter>) -> Self {
        Self { lookup, reporter }
    }

    /// HTTP lookups against the configured endpoints, diagnostics to `tracing`.
    pub fn from_config(config: &EnrichmentConfig) -> Result<Self, LookupError> {
        let lookup = HttpNameLookup::new(config)?;
        Ok(Self::new(Arc::new(lookup), Arc::new(TracingReporter)))
    }

    /// Attempt all three lookups for `person.name` and merge the results.
    ///
    /// Always completes. Zero ages, empty genders and empty country lists
    /// are treated as "no data" without a diagnostic.
    pub async fn enrich(&self, person: &mut PersonDraft) {
        let name = person.name.clone();
        self.reporter.enrichment_started(&name);

        let age = self.lookup.age(&name).await;
        if let Some(age) = self.settle(&name, LookupKind::Age, age).and_then(|r| r.age()) {
            person.age = Some(age);
            self.reporter.field_enriched(&name, LookupKind::Age, &age.to_string());
        }

        let gender = self.lookup.gender(&name).await;
        if let Some(resp) = self.settle(&name, LookupKind::Gender, gender) {
            if let Some(gender) = resp.gender() {
                person.gender = Some(gender.to_string());
                self.reporter.field_enriched(&name, LookupKind::Gender, gender);
            }
        }

        let nationality = self.lookup.nationality(&name).await;
        if let Some(resp) = self.settle(&name, LookupKind::Nationality, nationality) {
            if let Some(country) = resp.first_country() {
                person.nationality = Some(country.to_string());
                self.reporter.field_enriched(&name, LookupKind::Nationality, country);
            }
        }

        self.reporter.enrichment_finished(&name, person);
    }

    /// Report a failed lookup and discard it.
    fn settle<T>(
        &self,
        name: &str,
        kind: LookupKind,
        outcome: Result<T, LookupError>,
    ) -> Option<T> {
        match outcome {
            Ok(resp) => Some(resp),
            Err(e) => {
                self.reporter.lookup_failed(name, kind, &e);
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
