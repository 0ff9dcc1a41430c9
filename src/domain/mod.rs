//! Domain types of the clients list.

pub mod client;
pub mod list;
pub mod types;
