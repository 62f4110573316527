//! Local vulnerability database metadata
//!
//! # Modules
//!
//! - [`store`]: SQLite-backed bucket store holding the metadata record
//! - [`types`]: The metadata record and database type
//! - [`error`]: Error types for store operations

pub mod error;
pub mod store;
pub mod types;

pub use error::DbError;
pub use store::{MetadataReader, Store};
pub use types::{DbType, Metadata};
