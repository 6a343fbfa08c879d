//! # Stockpile Architecture
//!
//! Stockpile tracks inventory items, optionally sorted into named groups, in
//! two CSV files. It has two front ends over the same library: a one-shot CLI
//! (`stockpile add-item ...`) and an interactive, keyboard-driven menu.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front ends                                                 │
//! │  - cli/ (binary): argument parsing, one-shot output         │
//! │  - navigator/ + ui/: interactive pages on a raw terminal    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Add/restock, group creation, removal, listing, clearing  │
//! │  - Returns CmdResult with leveled messages, never prints    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository (repository.rs)                                 │
//! │  - CRUD and joins over items and groups                     │
//! │  - Mutations report an Outcome status                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - RecordStore: typed records <-> CSV text                  │
//! │  - TableBackend: FileBackend (production), MemBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing
//!
//! Everything below the front ends runs against [`store::memory::MemBackend`].
//! The interactive pages take their keystrokes from a [`ui::keys::KeySource`],
//! so tests script them with [`ui::keys::ScriptedKeys`] and inspect what was
//! written to a `Vec<u8>`.

pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod navigator;
pub mod repository;
pub mod store;
pub mod ui;
