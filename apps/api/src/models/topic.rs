use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Content brief for one topic, as resolved by a `TopicStore`.
/// Read-only to the content components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TopicDetails {
    pub title: String,
    pub category_name: String,
    /// Positive by convention; not checked here.
    pub target_word_count: i32,
    pub description: String,
    pub slug: String,
}
