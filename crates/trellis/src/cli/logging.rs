//! Logging bootstrap for the binary.
//!
//! The library only emits `log` records. Here they are routed to stderr
//! through flexi_logger, so stdout stays clean for rendered output.
//!
//! The level comes from, in order: `RUST_LOG`, `--verbose` (debug), the
//! configured `log_level`.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Start stderr logging once per process. Later calls are no-ops.
pub fn init_logging(configured_level: &str, verbose: bool) -> anyhow::Result<()> {
    let level = effective_level(configured_level, verbose);
    LOGGER.get_or_try_init(|| -> anyhow::Result<LoggerHandle> {
        let handle = Logger::try_with_env_or_str(level)?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()?;
        log::debug!(
            "event=cli_start level={level} version={}",
            env!("CARGO_PKG_VERSION")
        );
        Ok(handle)
    })?;
    Ok(())
}

fn effective_level(configured_level: &str, verbose: bool) -> &str {
    if verbose {
        "debug"
    } else if configured_level.trim().is_empty() {
        "warn"
    } else {
        configured_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_wins() {
        assert_eq!(effective_level("error", true), "debug");
        assert_eq!(effective_level("info", false), "info");
        assert_eq!(effective_level("  ", false), "warn");
    }
}
