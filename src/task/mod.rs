//! Task lifecycle management.
//!
//! Implements the task record lifecycle: creation with duplicate
//! suppression, retrieval, partial update, and hard deletion. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Payload validation in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
