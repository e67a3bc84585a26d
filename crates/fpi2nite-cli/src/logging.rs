use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Log level selected by the `-v` count
///
/// 0 keeps the default (`RUST_LOG` or warn); 1-4 map to error, warn, info and
/// debug; anything above is trace.
pub fn level_for(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("error"),
        2 => Some("warn"),
        3 => Some("info"),
        4 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Install the stderr subscriber; later calls are no-ops
pub fn init(verbose: u8) {
    let filter = match level_for(verbose) {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Some(level) = level_for(verbose) {
        let notice = format!("Verbose logging is enabled. (LEVEL={})", level.to_uppercase());
        if std::io::stderr().is_terminal() {
            eprintln!("{}", notice.yellow());
        } else {
            eprintln!("{}", notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_mapping() {
        assert_eq!(level_for(0), None);
        assert_eq!(level_for(1), Some("error"));
        assert_eq!(level_for(2), Some("warn"));
        assert_eq!(level_for(3), Some("info"));
        assert_eq!(level_for(4), Some("debug"));
        assert_eq!(level_for(9), Some("trace"));
    }

    #[test]
    fn test_quiet_default_shows_warnings_only() {
        assert_eq!(DEFAULT_FILTER, "warn");
    }
}
