//! In-memory collaborators for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{LlmError, TextGenerator};
use crate::models::topic::TopicDetails;
use crate::store::{StoreError, TopicStore};

pub struct FakeStore {
    pub topic: Option<TopicDetails>,
}

#[async_trait]
impl TopicStore for FakeStore {
    async fn get_topic_details(&self, topic_id: i64) -> Result<TopicDetails, StoreError> {
        self.topic.clone().ok_or(StoreError::NotFound(topic_id))
    }
}

/// Returns a fixed reply (or a quota error) and records every prompt it sees.
pub struct FakeModel {
    reply: Option<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl FakeModel {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeModel {
    async fn generate_content(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or(LlmError::Api {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        })
    }
}

pub fn rust_topic() -> TopicDetails {
    TopicDetails {
        title: "Why Rust Ownership Feels Strange at First".to_string(),
        category_name: "Programming".to_string(),
        target_word_count: 1200,
        description: "Explain borrowing to developers coming from garbage-collected languages."
            .to_string(),
        slug: "why-rust-ownership-feels-strange".to_string(),
    }
}
