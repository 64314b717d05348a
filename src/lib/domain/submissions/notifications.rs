//! Notification pair composition

use askama::Template;

use crate::domain::communication::{email_addresses::EmailAddress, mailer::OutgoingEmail};

use super::{
    emails::{
        client_acknowledgment::ClientAcknowledgmentTemplate, operator_alert::OperatorAlertTemplate,
    },
    errors::DispatchError,
    record::SubmissionRecord,
    reference::ReferenceNumber,
};

/// The two emails derived from a single submission
#[derive(Debug)]
pub struct NotificationPair {
    /// Plain text alert for the operator
    pub operator_alert: OutgoingEmail,

    /// Styled acknowledgment for the submitter
    pub client_acknowledgment: OutgoingEmail,

    /// Reference number included in the acknowledgment
    pub reference: ReferenceNumber,
}

impl NotificationPair {
    /// Composes both notifications for a submission, drawing a fresh
    /// reference number.
    pub fn compose(
        record: &SubmissionRecord,
        operator: &EmailAddress,
    ) -> Result<Self, DispatchError> {
        let reference = ReferenceNumber::generate();

        let alert = OperatorAlertTemplate::new(record);
        let operator_alert = OutgoingEmail {
            to: operator.clone(),
            subject: alert.subject(),
            html_body: None,
            plain_body: alert.render_plain(),
        };

        let acknowledgment = ClientAcknowledgmentTemplate::new(record, &reference);
        let html = css_inline::inline(&acknowledgment.render()?)?;
        let client_acknowledgment = OutgoingEmail {
            to: record.email.clone(),
            subject: acknowledgment.subject(),
            html_body: Some(html),
            plain_body: acknowledgment.render_plain(),
        };

        Ok(Self {
            operator_alert,
            client_acknowledgment,
            reference,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn record(item_name: Option<&str>) -> TestResult<SubmissionRecord> {
        Ok(SubmissionRecord::new(
            "A",
            "a@x.com",
            None,
            Some("hi".to_string()),
            item_name.map(String::from),
        )?)
    }

    #[test]
    fn test_operator_alert_goes_to_operator_address() -> TestResult {
        let operator = EmailAddress::new("ops@example.com")?;

        let pair = NotificationPair::compose(&record(None)?, &operator)?;

        assert_eq!(pair.operator_alert.to, operator);
        assert!(pair.operator_alert.html_body.is_none());

        Ok(())
    }

    #[test]
    fn test_acknowledgment_goes_to_submitter() -> TestResult {
        let operator = EmailAddress::new("ops@example.com")?;
        let record = record(Some("Web Development"))?;

        let pair = NotificationPair::compose(&record, &operator)?;

        assert_eq!(pair.client_acknowledgment.to, record.email);

        Ok(())
    }

    #[test]
    fn test_operator_subject_defaults_to_general_inquiry() -> TestResult {
        let operator = EmailAddress::new("ops@example.com")?;

        let pair = NotificationPair::compose(&record(None)?, &operator)?;

        assert!(pair.operator_alert.subject.contains("General Inquiry"));

        Ok(())
    }

    #[test]
    fn test_acknowledgment_html_contains_the_reference() -> TestResult {
        let operator = EmailAddress::new("ops@example.com")?;

        let pair = NotificationPair::compose(&record(None)?, &operator)?;

        let html = pair.client_acknowledgment.html_body.expect("html body");

        assert!(html.contains(&format!("#{}", pair.reference)));

        Ok(())
    }
}
