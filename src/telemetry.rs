use crate::error::SolverError;
use tracing::{subscriber::set_global_default, Subscriber};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Creates a subscriber which writes to stderr, leaving stdout to the
/// solver's own report. `RUST_LOG` wins over `default_level`.
pub fn get_subscriber(default_level: &str) -> impl Subscriber + Send + Sync {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::Layer::new()
        .with_writer(std::io::stderr)
        .without_time();

    Registry::default().with(env_filter).with(fmt_layer)
}

pub fn init_subscriber(
    subscriber: impl Subscriber + Send + Sync,
) -> Result<(), SolverError> {
    set_global_default(subscriber)?;
    Ok(())
}
