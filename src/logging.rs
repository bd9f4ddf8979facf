use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CREDIT_EVAL_LOG";

/// Picks the filter level from CLI flags, falling back to the configured level.
pub fn level_for(verbose: u8, quiet: bool, configured: Option<&str>) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => configured.unwrap_or("warn").to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Installs the stderr subscriber. `CREDIT_EVAL_LOG` overrides `level`.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("credit_eval={level}")));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_everything() {
        assert_eq!(level_for(0, true, Some("debug")), "error");
    }

    #[test]
    fn verbosity_flags_raise_level() {
        assert_eq!(level_for(1, false, None), "info");
        assert_eq!(level_for(2, false, Some("error")), "debug");
    }

    #[test]
    fn configured_level_is_used_without_flags() {
        assert_eq!(level_for(0, false, Some("info")), "info");
        assert_eq!(level_for(0, false, None), "warn");
    }
}
