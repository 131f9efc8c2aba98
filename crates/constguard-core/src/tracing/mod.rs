//! Observability for constguard.
//! `tracing` crate with `EnvFilter`, configured through `CONSTGUARD_LOG`.

pub mod setup;

pub use setup::init_tracing;
