//! Email relay module

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

pub mod errors;
pub mod message;

pub use errors::MailerError;
pub use message::OutgoingEmail;

/// Email relay service
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `email` - The composed [`OutgoingEmail`] to hand to the relay.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn send_email(&self, email: &OutgoingEmail) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send_email(&self, email: &OutgoingEmail) -> Result<(), MailerError>;
    }
}
