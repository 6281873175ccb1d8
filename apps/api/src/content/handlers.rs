//! Axum route handlers for the Content API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::article::{GeneratedArticle, SeoAssessment};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub content: String,
    pub title: String,
}

/// POST /api/v1/topics/:topic_id/article
///
/// Generates a markdown article from the stored topic brief. Nothing is persisted.
pub async fn handle_generate_article(
    State(state): State<AppState>,
    Path(topic_id): Path<i64>,
) -> Result<Json<GeneratedArticle>, AppError> {
    let article = state.article_generator.generate_article(topic_id).await?;

    info!(
        "Generated article for topic {} ({} chars)",
        topic_id,
        article.content.len()
    );

    Ok(Json(article))
}

/// POST /api/v1/articles/seo
///
/// Returns the model's SEO assessment of the supplied article.
pub async fn handle_optimize_content(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<SeoAssessment>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let assessment = state
        .content_optimizer
        .optimize_content(&request.content, &request.title)
        .await?;

    info!(
        "SEO assessment for {:?}: score={}",
        request.title, assessment.seo_score
    );

    Ok(Json(assessment))
}
