//! Diagnostics sink handed to the enricher.
//!
//! Lookup failures surface only here; they never reach the enricher's
//! caller. [`TracingReporter`] is the production sink.

use census_core::person::PersonDraft;

use crate::error::LookupError;
use crate::lookup::LookupKind;

/// Receives the observable events of an enrichment run.
pub trait EnrichmentReporter: Send + Sync {
    /// A lookup failed (transport, status or decode). Warning level.
    fn lookup_failed(&self, name: &str, kind: LookupKind, error: &LookupError);

    /// A lookup produced a value that was written to the draft.
    fn field_enriched(&self, name: &str, kind: LookupKind, value: &str);

    fn enrichment_started(&self, _name: &str) {}

    fn enrichment_finished(&self, _name: &str, _person: &PersonDraft) {}
}

/// Forwards enrichment events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl EnrichmentReporter for TracingReporter {
    fn lookup_failed(&self, name: &str, kind: LookupKind, error: &LookupError) {
        tracing::warn!(
            name,
            lookup = %kind,
            timeout = error.is_timeout(),
            error = %error,
            "Lookup failed, leaving field unset"
        );
    }

    fn field_enriched(&self, name: &str, kind: LookupKind, value: &str) {
        tracing::debug!(name, lookup = %kind, value, "Enriched field");
    }

    fn enrichment_started(&self, name: &str) {
        tracing::debug!(name, "Starting enrichment");
    }

    fn enrichment_finished(&self, name: &str, person: &PersonDraft) {
        tracing::debug!(
            name,
            age = ?person.age,
            gender = ?person.gender,
            nationality = ?person.nationality,
            "Finished enrichment"
        );
    }
}
