//! Command implementations for the datenbot CLI
//!
//! Each command follows a consistent pattern with dedicated Args and Command
//! structs.

pub mod post;
pub mod preview;
pub mod serve;
