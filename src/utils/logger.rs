use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn build_filter(level: &str, verbose: bool) -> EnvFilter {
    let default_directive = if verbose {
        "bisnode_gateway=debug,tower_http=debug,info".to_string()
    } else {
        format!("bisnode_gateway={level},tower_http={level}")
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

fn base_layer<S>() -> fmt::Layer<S> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

/// Registry with the level filter and one formatting layer, compact or JSON.
pub fn build_subscriber(
    level: &str,
    verbose: bool,
    json: bool,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    let (json_layer, compact_layer) = if json {
        (Some(base_layer().json()), None)
    } else {
        (None, Some(base_layer().compact()))
    };

    tracing_subscriber::registry()
        .with(build_filter(level, verbose))
        .with(json_layer)
        .with(compact_layer)
}

pub fn init_logger(level: &str, verbose: bool, json: bool) {
    build_subscriber(level, verbose, json).init();
}
