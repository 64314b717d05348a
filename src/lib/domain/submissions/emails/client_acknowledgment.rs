//! Client acknowledgment template

use askama::Template;

use crate::domain::submissions::{record::SubmissionRecord, reference::ReferenceNumber};

/// Acknowledgment email sent back to the submitter
#[derive(Debug, Template)]
#[template(path = "emails/submissions/client_acknowledgment.html")]
pub struct ClientAcknowledgmentTemplate {
    /// Submitter's name
    pub name: String,

    /// Resolved service name
    pub item_name: String,

    /// Cosmetic reference shown in the acknowledgment
    pub reference: String,
}

impl ClientAcknowledgmentTemplate {
    /// Creates a new `ClientAcknowledgmentTemplate`
    pub fn new(record: &SubmissionRecord, reference: &ReferenceNumber) -> Self {
        Self {
            name: record.name.clone(),
            item_name: record.item_name.clone(),
            reference: reference.to_string(),
        }
    }

    /// The acknowledgment subject
    pub fn subject(&self) -> String {
        format!("Order received: {}", self.item_name)
    }

    /// Renders the plain text version of the email
    pub fn render_plain(&self) -> String {
        format!(
            "Greetings {name},\n\
             \n\
             This confirms we have received your request for: {item_name}.\n\
             \n\
             Status: PROCESSING\n\
             Ref: #{reference}\n\
             \n\
             Our team is reviewing your request and will be in touch shortly.\n",
            name = self.name,
            item_name = self.item_name,
            reference = self.reference,
        )
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn template() -> TestResult<ClientAcknowledgmentTemplate> {
        let record = SubmissionRecord::new(
            "Ada",
            "ada@example.com",
            None,
            Some("hi".to_string()),
            Some("Web Development".to_string()),
        )?;

        Ok(ClientAcknowledgmentTemplate::new(
            &record,
            &ReferenceNumber::generate(),
        ))
    }

    #[test]
    fn test_html_includes_name_item_and_reference() -> TestResult {
        let template = template()?;
        let html = template.render()?;

        assert!(html.contains("Ada"));
        assert!(html.contains("Web Development"));
        assert!(html.contains("#ORD-"));

        Ok(())
    }

    #[test]
    fn test_subject_includes_item_name() -> TestResult {
        assert!(template()?.subject().contains("Web Development"));

        Ok(())
    }

    #[test]
    fn test_plain_text_includes_reference() -> TestResult {
        let template = template()?;

        assert!(template.render_plain().contains(&template.reference));

        Ok(())
    }
}
