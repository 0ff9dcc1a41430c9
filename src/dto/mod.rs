//! DTO modules that bridge the remote API, services and templates.

pub mod api;
pub mod main;
