//! Person enrichment against the agify / genderize / nationalize lookups.
//!
//! [`Enricher`] runs the three lookups one after another for a person's
//! name and merges whatever succeeds into the draft. Individual failures
//! are reported through an injected [`EnrichmentReporter`] and never reach
//! the caller.

pub mod config;
pub mod dto;
pub mod enricher;
pub mod error;
pub mod lookup;
pub mod reporter;

pub use config::EnrichmentConfig;
pub use enricher::Enricher;
pub use error::LookupError;
pub use lookup::{HttpNameLookup, LookupKind, NameLookup};
pub use reporter::{EnrichmentReporter, TracingReporter};
