use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GODO_LOG";

/// Installs a stderr subscriber filtered by `GODO_LOG`; silent when unset.
pub fn init() {
    let filter = filter_from(std::env::var(LOG_ENV).ok().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init();
}

fn filter_from(raw: Option<&str>) -> EnvFilter {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new("off"))
}
