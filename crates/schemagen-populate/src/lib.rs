//! Common types for schemagen populators.
//!
//! This crate provides the argument groups shared by every command that
//! generates data, so that all of them accept the same knobs.

pub mod args;

pub use args::{CommonPopulateArgs, DEFAULT_BATCH_SIZE};
