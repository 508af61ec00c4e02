//! HTTP API: server, routing, and request/response mapping for the item store.

pub mod app;
pub mod config;
pub mod middleware;
pub mod shutdown;
