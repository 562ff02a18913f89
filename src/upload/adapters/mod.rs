//! Adapter implementations for the submission port.

pub mod memory;

pub use memory::InMemoryJobSubmitter;
