//! CLI library components for the smartcard comparison tool.

pub mod logging;
pub mod session;
pub mod settings;
