//! Sink trait abstraction for generated rows.
//!
//! This crate defines the `RowSink` trait that every destination of
//! generated data implements. The populate pipeline is written against the
//! trait, so adding a destination never touches the generator.
//!
//! `MemorySink` keeps rows in memory and backs previews and tests.

mod memory;
mod traits;

pub use memory::MemorySink;
pub use traits::RowSink;
