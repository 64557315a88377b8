//! # Trellis CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/trellisapp/`: the object model, UI agnostic
//! - `crates/trellis/`: this CLI, a client of the `trellisapp` API facade
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/trellis/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Config, logging and dispatch (commands.rs, logging.rs)   │
//! │  - Text and JSON rendering (render.rs, styles.rs)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/trellisapp/src/api.rs)                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - Rendering is verified by feeding resources built from canned JSON
//!   into `render.rs` and comparing the text.
//! - End-to-end tests in `tests/` run the binary with `assert_cmd` against
//!   an unreachable API root, checking argument handling and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
