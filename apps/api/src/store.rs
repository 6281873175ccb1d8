//! Topic storage — the lookup-by-id capability the article generator depends on.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use tracing::debug;

use crate::models::topic::TopicDetails;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Topic {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Resolves topic briefs by id.
#[async_trait]
pub trait TopicStore: Send + Sync {
    async fn get_topic_details(&self, topic_id: i64) -> Result<TopicDetails, StoreError>;
}

const TOPIC_DETAILS_QUERY: &str = r#"
    SELECT t.title, c.name AS category_name, t.target_word_count, t.description, t.slug
    FROM topics t
    JOIN categories c ON c.id = t.category_id
    WHERE t.id = $1
"#;

/// Postgres-backed topic store. Read-only; schema is owned elsewhere.
#[derive(Clone)]
pub struct PgTopicStore {
    pool: PgPool,
}

impl PgTopicStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicStore for PgTopicStore {
    async fn get_topic_details(&self, topic_id: i64) -> Result<TopicDetails, StoreError> {
        debug!("Loading topic {topic_id}");
        sqlx::query_as::<_, TopicDetails>(TOPIC_DETAILS_QUERY)
            .bind(topic_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(topic_id))
    }
}
