//! # CLI Behavior
//!
//! One conversion per invocation:
//!
//! ```text
//! keepmd --source-path Takeout/Keep --target-path ~/vault --folder-name Keep
//! ```
//!
//! Flags win over `keepmd.toml` and `KEEPMD_*` environment variables. Boolean flags
//! can only switch a toggle on (or, for `--no-color-tags`, off); leaving a flag out
//! keeps the configured value.
//!
//! Logs go to stderr (`-v` for info, `-vv` for debug, or `RUST_LOG`), the report goes
//! to stdout as text or JSON (`--output json`).
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Logging setup, option merging, dispatch
//! - `render`: Report formatting

mod commands;
mod render;
pub mod setup;

pub use commands::run;
