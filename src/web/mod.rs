//! HTTP interface for the awards service

pub mod handlers;
pub mod models;
pub mod server;
