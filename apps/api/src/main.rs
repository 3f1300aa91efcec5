use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use portfolio_api::config::Config;
use portfolio_api::contact::payload::DeliveryTarget;
use portfolio_api::content::load_content;
use portfolio_api::email_client::EmailJsClient;
use portfolio_api::routes::build_router;
use portfolio_api::state::AppState;
use portfolio_api::theme::ThemeStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Static content, read-only from here on
    let content = load_content(config.content_path.as_deref()).await?;

    // Outbound mail addresses the owner by first name
    let delivery = DeliveryTarget {
        service_id: config.emailjs_service_id.clone(),
        template_id: config.emailjs_template_id.clone(),
        recipient_name: content.personal_info.first_name().to_string(),
    };
    let email = EmailJsClient::new(
        config.emailjs_public_key.clone(),
        config.emailjs_private_key.clone(),
    )?;
    info!("Email client initialized (service: {})", delivery.service_id);

    let theme = ThemeStore::load(config.theme_store_path.clone()).await;

    let state = AppState {
        content: Arc::new(content),
        email: Arc::new(email),
        delivery,
        theme,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the browser front-end is served from another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
