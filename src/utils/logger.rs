use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt};

static TRACING_INIT: OnceCell<()> = OnceCell::new();
pub fn init_tracing() {
    TRACING_INIT.get_or_init(|| {
        // RUST_LOG wins; otherwise workflow and endpoint events at info.
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();

        // The host process may already own a subscriber.
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::debug!("global tracing subscriber already set");
        }
    });
}
