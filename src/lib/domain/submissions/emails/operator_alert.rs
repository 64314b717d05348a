//! Operator alert template

use crate::domain::submissions::record::SubmissionRecord;

/// Plain text alert sent to the operator address for every submission
#[derive(Debug)]
pub struct OperatorAlertTemplate<'a> {
    record: &'a SubmissionRecord,
}

impl<'a> OperatorAlertTemplate<'a> {
    /// Creates a new `OperatorAlertTemplate`
    pub fn new(record: &'a SubmissionRecord) -> Self {
        Self { record }
    }

    /// The alert subject, carrying the resolved service name
    pub fn subject(&self) -> String {
        format!("New submission: {}", self.record.item_name)
    }

    /// Renders the plain text body of the alert
    pub fn render_plain(&self) -> String {
        format!(
            "NEW SUBMISSION RECEIVED\n\
             -----------------------\n\
             Name: {name}\n\
             Email: {email}\n\
             Phone: {phone}\n\
             Message: {message}\n\
             \n\
             Service: {item_name}\n",
            name = self.record.name,
            email = self.record.email,
            phone = self.record.phone_display(),
            message = self.record.message,
            item_name = self.record.item_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_subject_defaults_to_general_inquiry() -> TestResult {
        let record = SubmissionRecord::new("A", "a@x.com", None, Some("hi".to_string()), None)?;

        let template = OperatorAlertTemplate::new(&record);

        assert!(template.subject().contains("General Inquiry"));

        Ok(())
    }

    #[test]
    fn test_body_renders_missing_phone_as_na() -> TestResult {
        let record = SubmissionRecord::new("A", "a@x.com", None, Some("hi".to_string()), None)?;

        let body = OperatorAlertTemplate::new(&record).render_plain();

        assert!(body.contains("Phone: N/A"));
        assert!(body.contains("Message: hi"));

        Ok(())
    }
}
