//! # Charsheet Architecture
//!
//! Charsheet is a **UI-agnostic character profile editor**. The library holds a
//! fixed schema of profile fields, a free-form key/value document, and the
//! encoders that turn the document into plain text, Markdown, or a blank fillable
//! template, plus the parsers that read filled templates back in. The CLI is one
//! client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, sets up logging        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - The editor session: owns the live Document               │
//! │  - Load once at open, persist after every change            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per action, returns CmdResult                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Core (schema, model, codec,  │ │  Storage (store/)         │
//! │  format, parse): pure, no I/O │ │  ProfileStore port        │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## Round Trips
//!
//! The fillable template is the only format meant to come back in. Its labels are
//! the schema's display labels and the importer derives keys from those labels with
//! [`codec::label_to_key`], so a re-imported field may land under a different key
//! than the one it was exported from. See [`codec`] for the details.
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade
//! - [`commands`]: Business logic per action
//! - [`schema`]: The static field catalog
//! - [`model`]: The [`model::Document`] type
//! - [`codec`]: Key/label transforms
//! - [`format`]: Export encoders
//! - [`parse`]: Import parsers
//! - [`store`]: Persistence port and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod parse;
pub mod schema;
pub mod store;
