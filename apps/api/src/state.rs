use std::sync::Arc;

use crate::contact::payload::DeliveryTarget;
use crate::email_client::EmailSender;
use crate::models::content::PortfolioContent;
use crate::theme::ThemeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup.
    pub content: Arc<PortfolioContent>,
    /// Pluggable delivery backend. Default: EmailJsClient.
    pub email: Arc<dyn EmailSender>,
    pub delivery: DeliveryTarget,
    pub theme: ThemeStore,
}
