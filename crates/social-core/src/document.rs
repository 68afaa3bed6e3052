use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{Post, User};

/// Root of the persisted file: every user and every post.
///
/// Users are keyed by email, posts by their generated id. Map order carries
/// no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: HashMap<String, User>,
    #[serde(default)]
    pub posts: HashMap<String, Post>,
}

impl Document {
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Posts owned by `user_email`, by linear scan.
    pub fn posts_by(&self, user_email: &str) -> Vec<Post> {
        self.posts
            .values()
            .filter(|post| post.user_email == user_email)
            .cloned()
            .collect()
    }
}
