//! Console logging for the rpsboard binary
//!
//! `RUST_LOG` wins when set; otherwise `--debug` picks the default level.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Level used when RUST_LOG is absent or unparsable
fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

fn env_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(debug)))
}

/// Install the global fmt subscriber. Targets are shown only in debug mode.
pub fn init(debug: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_follows_debug_flag() {
        assert_eq!(default_directive(false), "info");
        assert_eq!(default_directive(true), "debug");
    }

    #[test]
    fn second_init_is_an_error() {
        // First call may race other tests for the global slot; only the
        // repeat is guaranteed to fail
        let _ = init(false);
        assert!(init(true).is_err());
    }
}
