use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. stdout is reserved for the result line.
///
/// `RUST_LOG` picks the filter (default `warn`); `verbose` forces `debug`.
/// Records from the `log` facade used by `rootcalc-core` are bridged in.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
