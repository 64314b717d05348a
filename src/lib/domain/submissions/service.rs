//! Submission dispatch service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

#[cfg(test)]
use mockall::mock;

use crate::domain::communication::{email_addresses::EmailAddress, mailer::Mailer};

use super::{
    errors::DispatchError, notifications::NotificationPair, record::SubmissionRecord,
    reference::ReferenceNumber,
};

/// Submission dispatch service
#[async_trait]
pub trait SubmissionDispatch: Clone + Send + Sync + 'static {
    /// Sends the operator alert and then the client acknowledgment for a
    /// submission.
    ///
    /// The sends are sequential and awaited: the acknowledgment is only
    /// attempted once the alert has gone out. A failed alert fails the
    /// whole dispatch, with nothing to compensate.
    ///
    /// # Returns
    /// - [`Ok`] with the [`ReferenceNumber`] included in the acknowledgment.
    /// - [`Err`] containing a [`DispatchError`] if either send fails.
    async fn dispatch(&self, record: &SubmissionRecord)
        -> Result<ReferenceNumber, DispatchError>;
}

#[cfg(test)]
mock! {
    pub SubmissionDispatch {}

    impl Clone for SubmissionDispatch {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl SubmissionDispatch for SubmissionDispatch {
        async fn dispatch(&self, record: &SubmissionRecord) -> Result<ReferenceNumber, DispatchError>;
    }
}

/// Submission dispatch backed by an email relay
#[derive(Debug, Clone)]
pub struct SubmissionDispatchImpl<M: Mailer> {
    mailer: Arc<M>,
    operator: EmailAddress,
}

impl<M: Mailer> SubmissionDispatchImpl<M> {
    /// Creates a new dispatch service sending alerts to `operator`.
    pub fn new(mailer: Arc<M>, operator: EmailAddress) -> Self {
        Self { mailer, operator }
    }
}

#[async_trait]
impl<M: Mailer> SubmissionDispatch for SubmissionDispatchImpl<M> {
    async fn dispatch(
        &self,
        record: &SubmissionRecord,
    ) -> Result<ReferenceNumber, DispatchError> {
        let pair = NotificationPair::compose(record, &self.operator)?;

        self.mailer.send_email(&pair.operator_alert).await?;
        self.mailer.send_email(&pair.client_acknowledgment).await?;

        info!(reference = %pair.reference, item = %record.item_name, "submission dispatched");

        Ok(pair.reference)
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use testresult::TestResult;

    use crate::domain::communication::mailer::{MailerError, MockMailer};

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

    #[tokio::test]
    async fn test_dispatch_sends_alert_before_acknowledgment() -> TestResult {
        let record = record(None)?;
        let operator = EmailAddress::new("ops@example.com")?;

        let mut mailer = MockMailer::new();
        let mut sequence = Sequence::new();

        let alert_recipient = operator.clone();
        mailer
            .expect_send_email()
            .times(1)
            .in_sequence(&mut sequence)
            .withf(move |email| email.to == alert_recipient)
            .returning(|_| Ok(()));

        let submitter = record.email.clone();
        mailer
            .expect_send_email()
            .times(1)
            .in_sequence(&mut sequence)
            .withf(move |email| email.to == submitter)
            .returning(|_| Ok(()));

        let service = SubmissionDispatchImpl::new(Arc::new(mailer), operator);

        service.dispatch(&record).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_failed_alert_skips_the_acknowledgment() -> TestResult {
        let record = record(None)?;
        let operator = EmailAddress::new("ops@example.com")?;

        let mut mailer = MockMailer::new();

        mailer
            .expect_send_email()
            .times(1)
            .returning(|_| Err(MailerError::SendError));

        let service = SubmissionDispatchImpl::new(Arc::new(mailer), operator);

        let result = service.dispatch(&record).await;

        assert!(matches!(result, Err(DispatchError::CouldNotSend)));

        Ok(())
    }

    #[tokio::test]
    async fn test_alert_subject_contains_general_inquiry_when_item_is_missing() -> TestResult {
        let record = record(None)?;
        let operator = EmailAddress::new("ops@example.com")?;

        let mut mailer = MockMailer::new();

        let alert_recipient = operator.clone();
        mailer
            .expect_send_email()
            .times(2)
            .withf(move |email| {
                email.to != alert_recipient || email.subject.contains("General Inquiry")
            })
            .returning(|_| Ok(()));

        let service = SubmissionDispatchImpl::new(Arc::new(mailer), operator);

        service.dispatch(&record).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_repeated_dispatches_send_independent_acknowledgments() -> TestResult {
        let record = record(Some("Web Development"))?;
        let operator = EmailAddress::new("ops@example.com")?;

        let mut mailer = MockMailer::new();
        mailer.expect_send_email().times(4).returning(|_| Ok(()));

        let service = SubmissionDispatchImpl::new(Arc::new(mailer), operator);

        let first = service.dispatch(&record).await?;
        let second = service.dispatch(&record).await?;

        // Each dispatch draws its own reference; the two values may collide
        // by chance, so only the independent draws are asserted.
        assert!(first.to_string().starts_with("ORD-"));
        assert!(second.to_string().starts_with("ORD-"));

        Ok(())
    }
}
