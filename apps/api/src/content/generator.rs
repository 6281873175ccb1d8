//! Article Generation — topic lookup → prompt → model call → `GeneratedArticle`.
//!
//! A call either fully succeeds or fails as a whole. Collaborator errors are
//! passed through unchanged; nothing here retries or substitutes defaults.

use std::sync::Arc;

use tracing::debug;

use crate::content::prompts::{fill_template, ARTICLE_PROMPT_TEMPLATE};
use crate::errors::ContentError;
use crate::llm_client::TextGenerator;
use crate::models::article::GeneratedArticle;
use crate::models::topic::TopicDetails;
use crate::store::TopicStore;

#[derive(Clone)]
pub struct ArticleGenerator {
    store: Arc<dyn TopicStore>,
    model: Arc<dyn TextGenerator>,
}

impl ArticleGenerator {
    pub fn new(store: Arc<dyn TopicStore>, model: Arc<dyn TextGenerator>) -> Self {
        Self { store, model }
    }

    /// Generates a markdown article for `topic_id`.
    ///
    /// The model is not called when the topic lookup fails.
    pub async fn generate_article(&self, topic_id: i64) -> Result<GeneratedArticle, ContentError> {
        let topic = self.store.get_topic_details(topic_id).await?;

        let prompt = build_article_prompt(&topic);
        debug!(
            "Generating article for topic {topic_id} ({} prompt chars)",
            prompt.len()
        );

        let content = self.model.generate_content(&prompt).await?;

        Ok(GeneratedArticle {
            content,
            topic_id,
            title: topic.title,
            slug: topic.slug,
        })
    }
}

fn build_article_prompt(topic: &TopicDetails) -> String {
    let target_word_count = topic.target_word_count.to_string();
    fill_template(
        ARTICLE_PROMPT_TEMPLATE,
        &[
            ("title", topic.title.as_str()),
            ("category_name", topic.category_name.as_str()),
            ("target_word_count", target_word_count.as_str()),
            ("description", topic.description.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use crate::store::StoreError;
    use crate::test_support::{rust_topic, FakeModel, FakeStore};

    fn generator(topic: Option<TopicDetails>, model: Arc<FakeModel>) -> ArticleGenerator {
        ArticleGenerator::new(Arc::new(FakeStore { topic }), model)
    }

    #[tokio::test]
    async fn test_article_copies_topic_fields_and_model_text() {
        let reply = "# Ownership\n\nIt is strange, then it is not.";
        let model = Arc::new(FakeModel::replying(reply));
        let article = generator(Some(rust_topic()), model.clone())
            .generate_article(7)
            .await
            .unwrap();

        assert_eq!(article.topic_id, 7);
        assert_eq!(article.title, "Why Rust Ownership Feels Strange at First");
        assert_eq!(article.slug, "why-rust-ownership-feels-strange");
        assert_eq!(article.content, reply);
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_lookup_failure_skips_model_call() {
        let model = Arc::new(FakeModel::replying("unused"));
        let err = generator(None, model.clone())
            .generate_article(99)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ContentError::Lookup(StoreError::NotFound(99))
        ));
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_model_failure_propagates_unchanged() {
        let model = Arc::new(FakeModel::failing());
        let err = generator(Some(rust_topic()), model)
            .generate_article(7)
            .await
            .unwrap_err();

        match err {
            ContentError::Generation(LlmError::Api { status, .. }) => assert_eq!(status, 429),
            other => panic!("expected generation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_prompt_embeds_topic_brief_and_requirements() {
        let model = Arc::new(FakeModel::replying("ok"));
        generator(Some(rust_topic()), model.clone())
            .generate_article(1)
            .await
            .unwrap();

        let prompt = &model.prompts()[0];
        assert!(prompt.contains("Write a comprehensive article about: Why Rust Ownership"));
        assert!(prompt.contains("Category: Programming"));
        assert!(prompt.contains("Target word count: 1200"));
        assert!(prompt.contains("- Write in markdown format"));
        assert!(prompt.contains("- Include a conclusion"));
        assert!(prompt.contains("- Be humorous when appropriate"));
        assert!(prompt.ends_with(
            "Additional context: Explain borrowing to developers coming from garbage-collected languages."
        ));
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let model = Arc::new(FakeModel::replying("same text"));
        let generator = generator(Some(rust_topic()), model.clone());

        let first = generator.generate_article(3).await.unwrap();
        let second = generator.generate_article(3).await.unwrap();

        assert_eq!(first, second);
        let prompts = model.prompts();
        assert_eq!(prompts[0], prompts[1]);
    }
}
