//! Storage layer for the booknotes collection.
//!
//! Provides the [`LocalStore`] trait defining the synchronous key-value
//! contract the collection is persisted through, plus [`MemoryStore`] and
//! [`SqliteStore`] as first-class backends, and [`BookStore`], the owning
//! store that every mutation goes through.
//!
//! # Architecture
//!
//! The layer is split in two:
//! - **Key-value backends** know nothing about books. They store opaque
//!   strings under string keys, synchronously.
//! - **The persistence adapter** ([`persist`]) and [`BookStore`] know the
//!   collection format: one JSON array of records under a single fixed key,
//!   overwritten wholesale on every flush.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`traits`]: LocalStore trait definition
//! - [`memory`]: MemoryStore implementation (with optional quota)
//! - [`schema`]: SQL schema constants and migration setup
//! - [`sqlite`]: SqliteStore implementation
//! - [`persist`]: collection blob load/save and back-compat repair
//! - [`store`]: BookStore, the owning collection store

pub mod error;
pub mod memory;
pub mod persist;
pub mod schema;
pub mod sqlite;
pub mod store;
pub mod traits;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::MemoryStore;
pub use persist::STORAGE_KEY;
pub use sqlite::SqliteStore;
pub use store::BookStore;
pub use traits::LocalStore;
