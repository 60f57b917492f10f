pub mod award;
pub mod config;
pub mod error;
pub mod intervals;
