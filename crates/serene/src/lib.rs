//! Core library for the Serene wellness companion.
//!
//! The personality assessment lives under [`workflows::assessment`]; the mood,
//! habit, and journal derived views live under [`workflows::wellness`].

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
