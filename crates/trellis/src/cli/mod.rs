//! # CLI Behavior
//!
//! This is **one possible UI client** for trellis. It is the only place
//! that knows about terminal I/O, exit codes and output formatting.
//!
//! ## Commands
//!
//! Every command operates on a member, given by id or username. `me`
//! (the default) is the member who owns the token.
//!
//! - `trellis member show [MEMBER]`
//! - `trellis member boards [MEMBER] [--filter F]`
//! - `trellis member cards [MEMBER] [--filter F]`
//! - `trellis member orgs [MEMBER] [--filter F]`
//! - `trellis member notifications [MEMBER]`
//! - `trellis member actions [MEMBER] [--filter F]`
//! - `trellis member update [MEMBER] [--full-name N] [--bio B]`
//! - `trellis member avatar [MEMBER] [--small]`
//!
//! `--output json` prints the resources as JSON instead of text.
//!
//! ## Module Structure
//!
//! - `commands`: Config loading, API construction and dispatch
//! - `logging`: stderr logging via flexi_logger
//! - `render`: Output formatting
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
