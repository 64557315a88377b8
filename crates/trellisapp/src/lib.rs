//! # Trellis Architecture
//!
//! Trellis is a **typed object model for the Trello REST API**. Remote
//! entities (members, boards, cards, ...) become local resources with
//! declared attributes, validation, change tracking and lazily fetched
//! related collections.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/trellis)                                       │
//! │  - Parses arguments, renders output, owns logging setup     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: one method per user-facing operation        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (resource.rs, association.rs, resources/)            │
//! │  - Field mapping, read-only guard, dirty tracking, save     │
//! │  - Declarations per resource type, checked by the registry  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (client/)                                           │
//! │  - Abstract Client trait                                    │
//! │  - HttpClient (production), MockClient (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr or exits the process.
//! Diagnostics go through the `log` facade; the binary decides where they
//! end up.
//!
//! ## Testing Strategy
//!
//! Everything above the client boundary is tested against
//! [`client::mock::MockClient`], which records every request. That is how
//! tests assert that a cached association was fetched once, or that a
//! refused save sent nothing.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`attributes`]: Attribute declarations and the registry
//! - [`validation`]: Presence and length rules
//! - [`resource`]: The generic resource: lifecycle, change tracking, save
//! - [`association`]: Lazy, cached related collections
//! - [`resources`]: Member, Board, Card, Organization, Notification, Action
//! - [`client`]: The remote service boundary
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod association;
pub mod attributes;
pub mod client;
pub mod config;
pub mod error;
pub mod resource;
pub mod resources;
pub mod validation;

pub use api::TrellisApi;
pub use error::{Result, TrellisError};
