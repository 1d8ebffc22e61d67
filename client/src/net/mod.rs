//! Network access for the browser client.

pub mod api;
