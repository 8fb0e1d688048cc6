//! Launch modes: configuration assembly and dispatch to the mode subsystems.
pub mod config;
pub mod runtime;
