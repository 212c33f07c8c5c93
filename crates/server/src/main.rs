//! Mock GitHub server - local stand-in for the GitHub issues API.
//!
//! Serves the mock on port 3001 by default so client code can be exercised
//! without network access or real credentials.
//!
//! # Architecture
//!
//! - Axum web framework, JSON in and out
//! - One in-memory `IssueStore` behind a mutex; nothing is persisted
//! - `tracing` with optional Sentry forwarding

#![cfg_attr(not(test), forbid(unsafe_code))]

use mock_github_server::app;
use mock_github_server::config::{LogFormat, ServerConfig};
use mock_github_server::state::AppState;
use sentry::integrations::tracing as sentry_tracing;
use sentry::types::{Dsn, ParseDsnError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Start Sentry when a DSN is configured.
///
/// Runs before the subscriber exists, so the outcome is returned for `main`
/// to log instead of being logged here.
fn init_sentry(config: &ServerConfig) -> Result<Option<sentry::ClientInitGuard>, ParseDsnError> {
    let Some(raw) = config.sentry_dsn.as_deref() else {
        return Ok(None);
    };
    let dsn: Dsn = raw.parse()?;

    Ok(Some(sentry::init(sentry::ClientOptions {
        dsn: Some(dsn),
        release: sentry::release_name!(),
        environment: config
            .sentry_environment
            .clone()
            .map(std::borrow::Cow::Owned),
        attach_stacktrace: true,
        ..Default::default()
    })))
}

/// Errors become Sentry events; warnings and info become breadcrumbs.
///
/// Debug output is left out: `tower_http` emits a pair per request and the
/// breadcrumb buffer would hold nothing else.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR => sentry_tracing::EventFilter::Event,
        tracing::Level::WARN | tracing::Level::INFO => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing(log_format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mock_github_server=info,tower_http=debug".into());

    let is_json = log_format == LogFormat::Json;
    let json_layer = is_json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!is_json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // Sentry must exist before the subscriber so its layer has a client
    let sentry_guard = init_sentry(&config);
    init_tracing(config.log_format);

    match &sentry_guard {
        Ok(Some(_)) => tracing::info!("Sentry initialized"),
        Ok(None) => tracing::debug!("SENTRY_DSN not set, Sentry disabled"),
        Err(err) => tracing::warn!(error = %err, "Ignoring invalid SENTRY_DSN"),
    }

    let app = app(AppState::new())
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "mock github listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM, logging which one arrived.
///
/// A listener that cannot be installed never resolves, so the other one
/// still works.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        () = ctrl_c => "SIGINT",
        () = terminate => "SIGTERM",
    };

    tracing::info!(signal, "Shutdown requested, draining in-flight requests");
}
