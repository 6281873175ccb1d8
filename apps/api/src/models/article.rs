use serde::{Deserialize, Serialize};

/// Markdown article produced for a topic.
///
/// `title` and `slug` are copied from the stored topic, never derived from `content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedArticle {
    pub content: String,
    pub topic_id: i64,
    pub title: String,
    pub slug: String,
}

/// SEO assessment decoded from the model's JSON reply.
///
/// Values pass through as decoded: `seo_score` is expected in 1–10 and
/// `meta_description` around 155 characters, but neither is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoAssessment {
    pub seo_score: f64,
    pub meta_description: String,
    pub keywords: Vec<String>,
    pub seo_feedback: String,
}
