use {
    tracing::Level,
    tracing_subscriber::{prelude::*, filter::filter_fn},
};

// Logs go to stderr so that the report on stdout stays clean.
pub fn init_logging() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .finish()
        .with(filter_fn(|metadata| {
            if metadata.target().starts_with("sentiment_core::headers") {
                metadata.level() <= &Level::DEBUG
            } else {
                metadata.level() <= &Level::INFO
            }
        }))
        .init();
}
