use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Name stamped on every bunyan record the server emits.
pub const SERVICE_NAME: &str = "hello_hal";

/// Greetings at `info`, actix's per-connection chatter only when it warns.
pub const DEFAULT_FILTER: &str = "info,actix_server=warn";

/// JSON (bunyan) subscriber writing to `sink`.
///
/// `RUST_LOG` overrides `default_filter` when set.
pub fn get_subscriber<Sink>(
    name: &str,
    default_filter: &str,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(name.to_owned(), sink))
}

/// Installs `subscriber` process-wide. Call once, before the server starts.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    //actix still logs through `log`, forward it
    LogTracer::init().expect("failed to set the logger");
    set_global_default(subscriber).expect("Failed to set subscriber");
}
