//! Storage layer for social
//!
//! This crate provides:
//! - The JSON document store (full read/rewrite per operation)
//! - User and post CRUD on top of it
//! - The owner-check policy applied when posts are created

pub mod db;
pub mod error;
pub mod policy;

pub use db::Storage;
pub use error::{ErrorKind, Result, StorageError};
pub use policy::OwnerCheck;
