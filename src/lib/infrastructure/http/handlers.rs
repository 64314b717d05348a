//! HTTP request handlers

pub mod submit;
pub mod v1;
