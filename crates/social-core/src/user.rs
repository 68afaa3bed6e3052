use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::timestamp::{self, UNSET};

/// A registered user, keyed by email in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(with = "time::serde::rfc3339", default = "unset")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i64,
}

fn unset() -> OffsetDateTime {
    UNSET
}

impl User {
    /// Build a fresh user stamped with the current UTC time.
    pub fn new(email: String, password: String, name: String, age: i64) -> Self {
        Self {
            created_at: timestamp::now(),
            ..Self::replacement(email, password, name, age)
        }
    }

    /// Build a user with an unset `created_at`, as stored by a full replace.
    pub fn replacement(email: String, password: String, name: String, age: i64) -> Self {
        Self {
            created_at: UNSET,
            email,
            password,
            name,
            age,
        }
    }

    /// True for the value returned by a lookup miss.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for User {
    fn default() -> Self {
        Self {
            created_at: UNSET,
            email: String::new(),
            password: String::new(),
            name: String::new(),
            age: 0,
        }
    }
}
