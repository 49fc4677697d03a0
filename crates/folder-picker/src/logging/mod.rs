use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted (default).
///
/// Hosts that already install a subscriber should skip this; a second
/// global subscriber is ignored.
pub fn init_logging(quiet: bool) {
    let directive = if quiet {
        "folder_picker=error"
    } else {
        "folder_picker=info"
    };

    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_logging() {
        // init_logging installs a process-wide subscriber, which would leak
        // JSON output into every other test in this binary. It is left to
        // hosts and exercised in tests/logging.rs.
    }
}
