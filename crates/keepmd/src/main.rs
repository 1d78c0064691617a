//! # keepmd CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, this file only
//! invokes `cli::run()` and turns errors into an exit code.
//!
//! ## Workspace Structure
//!
//! - `crates/keepmdapp/` — Library with the note converter and batch command
//! - `crates/keepmd/` — This CLI, depends on `keepmdapp`
//!
//! Everything in `keepmdapp` is UI agnostic. The CLI owns argument parsing, logging
//! setup, merging flags over the config file, and rendering the batch report.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests beside each module, batch tests in `keepmdapp/tests/`.
//! - **CLI**: argument parsing and rendering tests in `src/cli/`, end-to-end runs of
//!   the binary in `tests/` via `assert_cmd`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
