//! Terminal styles for the trellis CLI.
//!
//! Renderers refer to styles by role, never by color, so the look can
//! change in one place. `console` drops the escape codes when stdout is
//! not a terminal.

use console::Style;
use once_cell::sync::Lazy;

pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().color256(246));
pub static TIME: Lazy<Style> = Lazy::new(|| Style::new().color256(246).italic());
pub static LABEL: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static CLOSED: Lazy<Style> = Lazy::new(|| Style::new().red());
pub static UNREAD: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
