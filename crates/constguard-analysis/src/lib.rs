//! Enforcement engine for build-variant constants.
//!
//! A class-model provider hands over compiled classes; each field's
//! `Enforce*Value` annotations are decoded into rules, its compiled constant
//! is extracted, and every rule for the active flavor/build type is checked.
//! The first violation stops the run.

pub mod enforcement;
pub mod model;
pub mod provider;
pub mod reporters;
