//! Application plumbing: CLI, errors, settings, and the random source.

pub mod cli;
pub mod errors;
pub mod rng;
pub mod settings;
