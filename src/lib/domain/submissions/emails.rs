//! Notification email templates

pub mod client_acknowledgment;
pub mod operator_alert;
