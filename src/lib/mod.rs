//! Shared library modules providing error types, log level selection, token checks, and telemetry initialization.

pub mod errors;
pub mod log_level;
pub mod telemetry;
pub mod token;
