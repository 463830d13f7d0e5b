//! Organizational domain model.
//!
//! # Responsibility
//! - Define the canonical records of the HR schema: regions, countries,
//!   locations, departments, jobs, employees and job histories.
//! - Provide per-record validation used by dataset loading.
//!
//! # Invariants
//! - Records link to each other by typed id, never by embedded copies.
//! - Records are immutable once a dataset has been loaded.
//!
//! # See also
//! - `crate::seed` for referential integrity checks across collections.

pub mod employee;
pub mod geo;
pub mod org;
pub mod validation;

/// Record with a primary id that is unique within its collection.
pub trait Keyed {
    type Key: Eq + std::hash::Hash + std::fmt::Display;

    fn key(&self) -> &Self::Key;
}
