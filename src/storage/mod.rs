//! Storage implementations for the session

pub mod in_memory;

pub use in_memory::InMemorySessionStorage;
