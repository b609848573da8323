use tracing_subscriber::EnvFilter;

/// Initialize tracing for the command line tool.
///
/// Mapping:
/// - 0 (none) -> `fallback` from the settings file, else warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// `RUST_LOG` overrides both. Logs go to stderr so stdout stays clean for
/// resolved dates and reports.
pub fn init(verbosity: u8, fallback: Option<&str>) {
    let default_filter = match (verbosity, fallback) {
        (0, Some(filter)) => filter.to_string(),
        (0, None) => "circa=warn".to_string(),
        (1, _) => "circa=info".to_string(),
        (2, _) => "circa=debug".to_string(),
        _ => "circa=trace".to_string(),
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
