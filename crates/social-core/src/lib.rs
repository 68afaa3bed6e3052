//! Core record model for social
//!
//! This crate contains:
//! - Records (User, Post)
//! - The root Document persisted by the storage layer
//! - Timestamp helpers shared by both records

pub mod document;
pub mod post;
pub mod timestamp;
pub mod user;

pub use document::Document;
pub use post::Post;
pub use timestamp::UNSET;
pub use user::User;
