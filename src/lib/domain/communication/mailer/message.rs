//! Outgoing email message

use crate::domain::communication::email_addresses::EmailAddress;

/// A composed email, ready for the relay
#[derive(Clone, Debug, PartialEq)]
pub struct OutgoingEmail {
    /// The recipient of the email
    pub to: EmailAddress,

    /// The subject of the email
    pub subject: String,

    /// The HTML body of the email, when the message has one
    pub html_body: Option<String>,

    /// The plain text body of the email
    pub plain_body: String,
}
