use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use payment_gateway::adapters::http::{payment_router, PaymentAppState};
use payment_gateway::adapters::razorpay::{RazorpayConfig, RazorpayPaymentAdapter};
use payment_gateway::application::PaymentOrderGateway;
use payment_gateway::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load_validated()?;

    init_tracing(&config.server);
    info!(
        environment = ?config.server.environment,
        razorpay_key_id = %config.payment.razorpay_key_id,
        "Configuration loaded"
    );

    // Wire the provider behind the gateway
    let razorpay = RazorpayPaymentAdapter::new(RazorpayConfig::from_payment_config(&config.payment))?;
    let gateway = PaymentOrderGateway::new(Arc::new(razorpay));

    let app = build_router(&config.server, PaymentAppState::new(gateway));

    // Start server
    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn build_router(server: &ServerConfig, state: PaymentAppState) -> Router {
    let mut app = Router::new()
        .nest("/api", payment_router())
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let origins: Vec<HeaderValue> = server
        .cors_allowed_origins()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    if !origins.is_empty() {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        );
    }

    app
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
