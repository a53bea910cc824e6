//! Row structs and query filters.

pub mod person;
