//! Golden Raspberry Awards producer interval service
//!
//! Loads the awards dataset into SQLite and serves, over HTTP, the producers
//! with the shortest and longest gaps between consecutive wins.

pub mod core;
pub mod store;
pub mod web;
