//! Read-only repository layer over the loaded dataset.
//!
//! # Responsibility
//! - Define the read contract consumed by the query layer.
//! - Hide how records are held in memory from service callers.
//!
//! # Invariants
//! - `read_all` returns records in insertion order, unfiltered.
//! - Repositories never mutate records after construction.

pub mod memory_repo;
