use crate::contact::validation::ContactFields;
use crate::email_client::TemplateParams;

/// Where a contact message is delivered: EmailJS service and template, plus the
/// name the template greets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryTarget {
    pub service_id: String,
    pub template_id: String,
    pub recipient_name: String,
}

pub fn subject_line(sender_name: &str) -> String {
    format!("New Contact Form Message from {sender_name}")
}

fn message_body(fields: &ContactFields) -> String {
    format!(
        "📧 New Contact Form Submission\n\
         \n\
         From: {name}\n\
         Email: {email}\n\
         \n\
         Message:\n\
         {message}\n\
         \n\
         --\n\
         This message was sent from the portfolio contact form.",
        name = fields.name,
        email = fields.email,
        message = fields.message,
    )
}

/// Template variables for one submission. Built fresh per attempt.
pub fn build_template_params(fields: &ContactFields, recipient_name: &str) -> TemplateParams {
    TemplateParams::from([
        ("from_name".to_string(), fields.name.clone()),
        ("from_email".to_string(), fields.email.clone()),
        ("message".to_string(), message_body(fields)),
        ("to_name".to_string(), recipient_name.to_string()),
        ("reply_to".to_string(), fields.email.clone()),
        ("subject".to_string(), subject_line(&fields.name)),
    ])
}
