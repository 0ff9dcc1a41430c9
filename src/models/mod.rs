//! Models loaded from configuration.

pub mod config;
