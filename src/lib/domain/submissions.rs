//! Submission workflow module

pub mod emails;
pub mod errors;
pub mod notifications;
pub mod record;
pub mod reference;
pub mod service;
