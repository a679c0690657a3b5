//! Storage backends for the video tracker.
//!
//! [`CsvRepository`] keeps videos in a CSV file; [`InMemoryRepository`]
//! keeps them for the lifetime of the process.

pub mod codec;
pub mod file;
pub mod memory;
pub mod store;

pub use file::CsvRepository;
pub use memory::InMemoryRepository;
pub use store::CsvStore;
pub use vidtrack_core::{ReadRepository, Repository, StorageError};
