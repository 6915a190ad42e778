use minigraph_config::{LogConfig, LogStyle};
use tracing::Subscriber;
use tracing_subscriber::{
    layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

pub(crate) fn init(config: &LogConfig) {
    let env_filter = EnvFilter::new(config.level.as_filter_str());

    tracing_subscriber::registry()
        .with(log_format(config.style))
        .with(env_filter)
        .init();
}

/// stdout carries the response, logs always go to stderr.
fn log_format<S>(style: LogStyle) -> BoxedLayer<S>
where
    S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
{
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    match style {
        // for interactive terminals we provide colored output
        LogStyle::Text if atty::is(atty::Stream::Stderr) => layer.with_ansi(true).boxed(),
        LogStyle::Text => layer.with_ansi(false).boxed(),
        LogStyle::Json => layer.json().boxed(),
    }
}
