//! In-memory adapters for message persistence.

mod store;

pub use store::InMemoryMessageStore;
