//! CLI command implementations

pub mod check;
pub mod config;
pub mod console;
pub mod init;
pub mod open;
