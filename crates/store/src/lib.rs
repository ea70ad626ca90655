//! Entry store boundary.
//!
//! The store is the only place accepted entries live. It is owned by the
//! session that displays it and mutated exclusively through `EntryStore`.

pub mod in_memory;
pub mod store;

pub use in_memory::InMemoryEntryStore;
pub use store::EntryStore;
