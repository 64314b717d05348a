//! Submission workflow errors

use css_inline::InlineError;
use thiserror::Error;
use tracing::debug;

use crate::domain::communication::{
    email_addresses::EmailAddressError, mailer::MailerError,
};

/// Errors that can occur while normalizing a submission
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The submission has no name
    #[error("a name is required")]
    MissingName,

    /// The submission has no message
    #[error("a message is required")]
    MissingMessage,

    /// The submitter's email address is missing or invalid
    #[error(transparent)]
    InvalidEmailAddress(#[from] EmailAddressError),
}

/// Errors that can occur while dispatching the notification pair
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A notification email could not be sent
    #[error("could not send notification email")]
    CouldNotSend,

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl From<MailerError> for DispatchError {
    fn from(err: MailerError) -> Self {
        debug!("MailerError -> DispatchError");

        match err {
            MailerError::SendError | MailerError::InvalidEmail => DispatchError::CouldNotSend,
            MailerError::UnknownError(e) => DispatchError::UnknownError(e),
        }
    }
}

impl From<InlineError> for DispatchError {
    fn from(_err: InlineError) -> Self {
        debug!("InlineError -> DispatchError");

        DispatchError::CouldNotSend
    }
}

impl From<askama::Error> for DispatchError {
    fn from(_err: askama::Error) -> Self {
        debug!("askama::Error -> DispatchError");

        DispatchError::CouldNotSend
    }
}
