// Contact form: field validation, the submission state machine, and the
// outbound template payload. Delivery itself goes through email_client.

pub mod controller;
pub mod handlers;
pub mod payload;
pub mod validation;
