//! Email client: the single point of entry for outbound mail.
//!
//! Delivery goes through EmailJS: the contact form fills a stored template and EmailJS
//! relays it to the portfolio owner. Other modules depend on the `EmailSender` trait only.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

const EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The only status EmailJS uses to acknowledge a delivered message.
pub const SUCCESS_STATUS: u16 = 200;

/// Values substituted into the EmailJS template, keyed by template variable.
pub type TemplateParams = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Raw provider answer. Callers decide what counts as delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResponse {
    pub status: u16,
    pub text: String,
}

impl SendResponse {
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

/// Outbound message delivery. Implement this to swap providers without touching
/// the contact form.
///
/// Carried in `AppState` as `Arc<dyn EmailSender>`.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<SendResponse, EmailError>;
}

#[derive(Debug, Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// EmailJS REST client. One request per call, no retries: a resend is the user's decision.
#[derive(Clone)]
pub struct EmailJsClient {
    client: Client,
    public_key: String,
    private_key: Option<String>,
}

impl EmailJsClient {
    pub fn new(public_key: String, private_key: Option<String>) -> Result<Self, EmailError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            public_key,
            private_key,
        })
    }

    fn request_body<'a>(
        &'a self,
        service_id: &'a str,
        template_id: &'a str,
        params: &'a TemplateParams,
    ) -> EmailJsRequest<'a> {
        EmailJsRequest {
            service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
            access_token: self.private_key.as_deref(),
        }
    }
}

#[async_trait]
impl EmailSender for EmailJsClient {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<SendResponse, EmailError> {
        let body = self.request_body(service_id, template_id, params);

        let response = self
            .client
            .post(EMAILJS_API_URL)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        debug!(status, "EmailJS responded: {text}");

        Ok(SendResponse { status, text })
    }
}
