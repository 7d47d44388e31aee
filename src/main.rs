use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, build_router};
use medform_core::CoreConfig;

/// Log directives applied on top of `RUST_LOG`; `tower_http` carries the per-request traces.
const DEFAULT_LOG_DIRECTIVES: [&str; 3] = ["medform_run=info", "api_rest=info", "tower_http=debug"];

/// Main entry point for the medical form service
///
/// Starts the REST server on the configured address (default: 0.0.0.0:3001) and serves until
/// Ctrl+C or SIGTERM is received.
///
/// # Environment Variables
/// - `PORT`: listening port (default: 3001)
/// - `MEDFORM_HOST`: bind address (default: "0.0.0.0")
/// - `MEDFORM_BODY_LIMIT_BYTES`: maximum request body size (default: 50 MiB)
/// - `RUST_LOG`: log filter, combined with [`DEFAULT_LOG_DIRECTIVES`]
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - any environment variable above does not parse,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in DEFAULT_LOG_DIRECTIVES {
        filter = filter.add_directive(directive.parse()?);
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = Arc::new(CoreConfig::from_env_values(
        std::env::var("PORT").ok(),
        std::env::var("MEDFORM_HOST").ok(),
        std::env::var("MEDFORM_BODY_LIMIT_BYTES").ok(),
    )?);

    let addr = cfg.socket_addr();
    tracing::info!(
        body_limit_bytes = cfg.body_limit_bytes(),
        "++ Starting medical form REST API on {}",
        addr
    );

    let app = build_router(AppState::new(cfg));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Medical form REST API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::Directive;

    #[test]
    fn default_log_directives_parse() {
        for directive in DEFAULT_LOG_DIRECTIVES {
            assert!(directive.parse::<Directive>().is_ok(), "bad directive {directive}");
        }
    }

    #[test]
    fn request_traces_are_enabled_by_default() {
        let filter = DEFAULT_LOG_DIRECTIVES
            .iter()
            .fold(tracing_subscriber::EnvFilter::new(""), |f, d| {
                f.add_directive(d.parse().expect("directive"))
            });
        assert!(filter.to_string().contains("tower_http=debug"));
    }
}
