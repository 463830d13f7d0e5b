//! Query use-cases over the organization repositories.
//!
//! # Responsibility
//! - Answer read-only questions about employees, departments and job
//!   histories.
//! - Keep callers decoupled from how repositories hold their records.

pub mod query_service;
