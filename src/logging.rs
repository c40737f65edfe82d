use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "frey_site=info";

/// Console logging, filtered by `RUST_LOG` when set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init();

    if let Err(e) = result {
        eprintln!("Logging already initialized: {e}");
    }
}
