use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::timestamp::{self, UNSET};

/// Missing fields decode to zero values, matching `User`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub id: String,
    #[serde(with = "time::serde::rfc3339", default = "unset")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub text: String,
}

fn unset() -> OffsetDateTime {
    UNSET
}

impl Post {
    /// Build a post with a fresh identifier, stamped with the current UTC time.
    pub fn new(user_email: String, text: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: timestamp::now(),
            user_email,
            text,
        }
    }
}
