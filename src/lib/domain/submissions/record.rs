//! Submission record and field normalization

use std::collections::HashMap;

use crate::domain::communication::email_addresses::EmailAddress;

use super::errors::SubmissionError;

/// Sentinel used when a submission does not name a service
pub const GENERAL_INQUIRY: &str = "General Inquiry";

/// Form field carrying the selected service on the order page
const ITEM_NAME_FIELD: &str = "item_name";

/// Hidden input the order page stores the selection in
const HIDDEN_ITEM_FIELD: &str = "form-item-name";

/// A single normalized form submission.
///
/// Ephemeral by design: constructed at submit time, passed to a delivery
/// path, discarded when the request resolves. Never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionRecord {
    /// The submitter's name
    pub name: String,

    /// The submitter's email address
    pub email: EmailAddress,

    /// Optional phone number
    pub phone: Option<String>,

    /// Free-text message
    pub message: String,

    /// The service or plan the submission concerns. Non-empty after
    /// normalization; defaults to [`GENERAL_INQUIRY`].
    pub item_name: String,
}

impl SubmissionRecord {
    /// Create a normalized record.
    ///
    /// A missing or blank `item_name` resolves to [`GENERAL_INQUIRY`];
    /// blank phone numbers are treated as absent.
    pub fn new(
        name: &str,
        email: &str,
        phone: Option<String>,
        message: Option<String>,
        item_name: Option<String>,
    ) -> Result<Self, SubmissionError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(SubmissionError::MissingName);
        }

        let email = EmailAddress::new(email)?;

        let message = message
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty())
            .ok_or(SubmissionError::MissingMessage)?;

        let phone = phone
            .map(|phone| phone.trim().to_string())
            .filter(|phone| !phone.is_empty());

        let item_name = item_name
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .unwrap_or_else(|| GENERAL_INQUIRY.to_string());

        Ok(Self {
            name: name.to_string(),
            email,
            phone,
            message,
            item_name,
        })
    }

    /// Build a record from raw form fields.
    ///
    /// All of the site's forms go through this one mapping: `message` falls
    /// back to the order page's `notes` field, and the service name falls
    /// back to the order page's hidden input before defaulting.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, SubmissionError> {
        let field = |key: &str| {
            fields
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };

        let message = field("message").or_else(|| field("notes")).map(String::from);

        let item_name = field(ITEM_NAME_FIELD)
            .or_else(|| field(HIDDEN_ITEM_FIELD))
            .map(String::from);

        Self::new(
            field("name").unwrap_or_default(),
            field("email").unwrap_or_default(),
            fields.get("phone").cloned(),
            message,
            item_name,
        )
    }

    /// Phone number as rendered in outgoing email bodies
    pub fn phone_display(&self) -> &str {
        self.phone.as_deref().unwrap_or("N/A")
    }
}
