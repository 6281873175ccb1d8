use crate::config::Config;
use crate::content::generator::ArticleGenerator;
use crate::content::optimizer::ContentOptimizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub article_generator: ArticleGenerator,
    pub content_optimizer: ContentOptimizer,
    pub config: Config,
}
