//! Census core library.
//!
//! Domain types shared by the persistence, enrichment and HTTP crates:
//! the person draft that flows through enrichment, input validation,
//! pagination helpers and the common error type.

pub mod error;
pub mod pagination;
pub mod person;
pub mod types;
