//! Workforce: operational task lifecycle and reassignment engine.
//!
//! This crate tracks units of assigned work ("tasks") tied to an external
//! reference such as an order or a customer entity, across creation, status
//! and description updates, priority changes, commentary, reassignment, and
//! date-windowed retrieval.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task records, the store port, and the lifecycle engine

pub mod task;
