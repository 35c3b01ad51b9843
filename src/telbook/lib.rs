//! # Telbook
//!
//! Telbook is a UI-agnostic phonebook library with a thin CLI client.
//! Records live in a single flat file, one JSON object per line, and a
//! record's id is its 1-based line position — assigned once on append and
//! never reassigned.
//!
//! ## Layers
//!
//! ```text
//! CLI layer (main.rs + args.rs + cli/)   — clap parsing, prompts, colored output;
//!                                          the only place that touches stdout/stderr
//! API facade (api.rs)                    — TelbookApi, thin dispatch over commands
//! Command layer (commands/*.rs)          — pure business logic, returns CmdResult
//! Storage layer (store/)                 — EntryStore trait; FileStore (production),
//!                                          InMemoryStore (tests)
//! ```
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns
//! `Result<CmdResult>`, and never writes to the terminal or exits the
//! process.
//!
//! ## Module overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic for add, list, find and edit
//! - [`store`]: storage abstraction and backends
//! - [`model`]: the [`model::Entry`] record and its validation rules
//! - [`schema`]: partial-field variants for creation, editing and search
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod schema;
pub mod store;
