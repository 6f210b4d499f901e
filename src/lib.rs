//! Taskdesk: a minimal task-tracking REST service.
//!
//! Taskdesk manages to-do task records (title, optional description,
//! completion flag, timestamps) backed by `PostgreSQL`, with duplicate
//! suppression for rapid identical creates and PATCH-style partial updates.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task domain, validation, persistence, and lifecycle service
//! - [`http`]: HTTP boundary translating requests into service calls
//! - [`config`]: Environment-driven runtime settings

pub mod config;
pub mod http;
pub mod task;
