use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins over the configured directive.
fn env_filter(directive: String) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

fn plain_layer<S>() -> fmt::Layer<S> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool, level: &str) {
    let directive = if verbose {
        "trivia_api=debug,info".to_string()
    } else {
        format!("trivia_api={}", level)
    };

    tracing_subscriber::registry()
        .with(env_filter(directive))
        .with(plain_layer().compact())
        .init();
}

pub fn init_json_logger(level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(format!("trivia_api={}", level)))
        .with(plain_layer().json()) // one object per line for log shippers
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_layers_build_both_formats() {
        let compact = tracing_subscriber::registry()
            .with(env_filter("trivia_api=debug".to_string()))
            .with(plain_layer().compact());
        tracing::subscriber::with_default(compact, || tracing::debug!("compact line"));

        let json = tracing_subscriber::registry()
            .with(env_filter("trivia_api=info".to_string()))
            .with(plain_layer().json());
        tracing::subscriber::with_default(json, || tracing::info!("json line"));
    }
}
