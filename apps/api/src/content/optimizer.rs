//! SEO Optimizer — asks the model to assess an article and decodes the reply
//! into a typed `SeoAssessment`.

use std::sync::Arc;

use tracing::debug;

use crate::content::prompts::{fill_template, SEO_PROMPT_TEMPLATE};
use crate::errors::ContentError;
use crate::llm_client::{decode_json, TextGenerator};
use crate::models::article::SeoAssessment;

#[derive(Clone)]
pub struct ContentOptimizer {
    model: Arc<dyn TextGenerator>,
}

impl ContentOptimizer {
    pub fn new(model: Arc<dyn TextGenerator>) -> Self {
        Self { model }
    }

    /// Scores `content` for search visibility.
    ///
    /// The reply must decode into all four assessment fields. Anything else
    /// fails with `ContentError::AssessmentParse`; no partial assessment is returned.
    pub async fn optimize_content(
        &self,
        content: &str,
        title: &str,
    ) -> Result<SeoAssessment, ContentError> {
        let prompt = fill_template(SEO_PROMPT_TEMPLATE, &[("title", title), ("content", content)]);
        debug!("Requesting SEO assessment ({} prompt chars)", prompt.len());

        let reply = self.model.generate_content(&prompt).await?;

        decode_json::<SeoAssessment>(&reply).map_err(ContentError::AssessmentParse)
    }
}
