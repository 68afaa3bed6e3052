use serde::{Deserialize, Serialize};

/// How `create_post` treats a `userEmail` with no matching user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerCheck {
    /// Only a failed lookup aborts; posts for unknown users are accepted.
    #[default]
    Lenient,
    /// Posts for unknown users are rejected.
    Strict,
}
