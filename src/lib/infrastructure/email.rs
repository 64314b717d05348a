//! Email delivery implementations

pub mod smtp;
pub mod widget;
