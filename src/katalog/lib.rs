//! # Katalog Architecture
//!
//! Katalog is a **UI-agnostic product-catalog library**. The CLI binary is a
//! thin client; everything a UI needs — validation, the record collection,
//! persistence reconciliation — lives behind the API facade.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, renders the table, prints messages     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Validator (validate.rs)    │
//! │  - Pure business logic: validate, reconcile, mutate         │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract CatalogStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//!
//! The whole catalog is one JSON array in `products.json`, re-read on every
//! command and rewritten in full after every mutation. A missing blob is
//! seeded with two default records; an unreadable one falls back to an empty
//! collection with a warning. Nothing in this crate is a fatal error except
//! real I/O failure.
//!
//! ## Module Overview
//!
//! - [`api`]: the API facade — entry point for all operations
//! - [`commands`]: business logic for each operation
//! - [`validate`]: per-field form validation
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: core data types (`Product`, `Category`, `ProductId`)
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;
