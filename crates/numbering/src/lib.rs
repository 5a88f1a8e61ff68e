//! Document numbering (invoices, quotations, delivery notes).
//!
//! Numbers are issued client-side from per-type counters kept in local storage:
//! a durable file store with a volatile in-memory mirror behind it. There is no
//! coordination with the remote document store, so numbers are unique only within
//! one storage location.

pub mod clock;
pub mod config;
pub mod counter;
pub mod file_store;
pub mod generator;
pub mod number;
pub mod store;

pub use clock::{Clock, FixedClock, LocalClock};
pub use config::NumberingConfig;
pub use counter::DurableCounter;
pub use file_store::FileSequenceStore;
pub use generator::SequenceGenerator;
pub use number::DocumentNumber;
pub use store::{InMemorySequenceStore, SequenceStore, StoreError};
