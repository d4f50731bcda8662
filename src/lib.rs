pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod server;
pub mod slack;
pub mod summary;

pub use errors::{Error, Result};
