//! Core crate for constguard.
//!
//! Holds the value model shared by the decoder, extractor and evaluator,
//! plus the ambient pieces every other crate leans on: error enums,
//! layered TOML configuration, tracing setup and the event system.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;
