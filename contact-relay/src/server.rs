//! Router assembly and the HTTP server loop

use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use http::HeaderValue;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::config::{EmailBackendKind, RelayConfig, ServerSettings};
use crate::contact::ContactService;
use crate::email::{ConsoleBackend, EmailSender, SmtpBackend};
use crate::handlers;
use crate::health::health_check;
use crate::observability::ObservabilityConfig;
use crate::state::AppState;

/// Build the application router
///
/// # Errors
///
/// Returns an error if a configured CORS origin is not a valid header value
pub fn router(state: AppState, settings: &ServerSettings) -> anyhow::Result<Router> {
    let cors = cors_layer(&settings.cors_origins)?;

    Ok(Router::new()
        .route("/api/contact", post(handlers::contact::submit))
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state))
}

/// CORS for the configured origins, allowing any method and header
///
/// Methods and headers are mirrored from the preflight because wildcards
/// cannot be combined with credentials.
///
/// # Errors
///
/// Returns an error if an origin is not a valid header value
pub fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("invalid CORS origin: {origin}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Construct the email backend selected in configuration
#[must_use]
pub fn build_sender(config: &RelayConfig) -> Arc<dyn EmailSender> {
    match config.email.backend {
        EmailBackendKind::Smtp => Arc::new(SmtpBackend::new(config.smtp.clone())),
        EmailBackendKind::Console => Arc::new(ConsoleBackend::with_bodies()),
    }
}

/// Validate configuration, bind the listener and serve until shutdown
///
/// # Errors
///
/// Returns an error if the configuration is incomplete, the address cannot be
/// bound, or the server fails
pub async fn serve(config: RelayConfig) -> anyhow::Result<()> {
    config.validate()?;

    let observability = ObservabilityConfig::default();
    let contact = ContactService::new(
        build_sender(&config),
        config.sender_address(),
        &config.contact.recipient,
    );
    let state = AppState::new(contact, observability.clone());
    let app = router(state, &config.server)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        service = %observability.service_name,
        version = %observability.version,
        %addr,
        backend = ?config.email.backend,
        smtp_host = %config.smtp.host,
        smtp_port = config.smtp.port,
        "Starting server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
