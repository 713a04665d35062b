//! Task lifecycle management for Workforce.
//!
//! This module implements the task engine: creating task records against an
//! external reference, batch status and description updates, priority
//! changes, commentary, reassignment-by-reference with a preserved audit
//! history, and date-windowed retrieval with overdue spillover. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
