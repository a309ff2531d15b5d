//! Console logging setup shared by the guidenav binaries.
//!
//! `RUST_LOG` takes precedence; otherwise the `-v` count picks the level:
//!
//! | flags  | filter |
//! |--------|--------|
//! | (none) | warn   |
//! | `-v`   | info   |
//! | `-vv`  | debug  |
//! | `-vvv` | trace  |

use tracing_subscriber::EnvFilter;

/// Filter directive for a verbosity count
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber.
///
/// Returns `false` if a subscriber was already installed (tests, or a host
/// application that configured its own).
pub fn init_logging(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_mapping() {
        assert_eq!(verbosity_filter(0), "warn");
        assert_eq!(verbosity_filter(1), "info");
        assert_eq!(verbosity_filter(2), "debug");
        assert_eq!(verbosity_filter(3), "trace");
        assert_eq!(verbosity_filter(200), "trace");
    }

    #[test]
    fn test_second_init_is_rejected() {
        let _ = init_logging(0);
        assert!(!init_logging(0));
    }
}
