//! In-memory course database keyed by CRN.
//!
//! [`CourseStore`] is a fixed-size separate-chaining hash table sized to a
//! prime bucket count. [`CourseManager`] wraps it with file loading and a
//! lookup fallback.

pub mod config;
pub mod error;
pub mod manager;
pub mod parser;
pub mod prime;
pub mod record;
pub mod store;
pub mod tokio;

pub use config::Config;
pub use error::{IngestError, StoreError};
pub use manager::CourseManager;
pub use record::CourseRecord;
pub use store::CourseStore;
