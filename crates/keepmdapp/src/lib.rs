//! # keepmd Architecture
//!
//! keepmd converts a Google Keep Takeout export (one `.json` file per note) into a
//! folder of Markdown notes with `![[images/...]]` embeds and `#hashtag` labels.
//!
//! Like most of our tools, it is a library with a thin CLI on top:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/keepmd)                                        │
//! │  - Flags, logging setup, printing the report, exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/)                                       │
//! │  - Walk the export, filter notes, write results             │
//! │  - Return a structured BatchReport                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Conversion (convert/)                                      │
//! │  - NoteRecord + ConvertOptions → Markdown                   │
//! │  - Copies attachments, never fails a note                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No UI Assumptions
//!
//! From `commands` inward, code never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; user-facing output is returned as
//! [`commands::CmdMessage`]s for the client to render.
//!
//! ## Module Overview
//!
//! - [`model`]: Keep note types and JSON parsing
//! - [`convert`]: The note converter and its section renderers
//! - [`config`]: Persisted defaults and per-run conversion options
//! - [`output`]: Layout of the converted-notes folder
//! - [`commands`]: Batch conversion
//! - [`error`]: Error types

pub mod commands;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod output;
