// Content components: article generation and SEO assessment.
// Both are stateless and reach the model only through `TextGenerator`.

pub mod generator;
pub mod handlers;
pub mod optimizer;
pub mod prompts;
