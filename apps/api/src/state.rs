use std::sync::Arc;

use crate::config::Config;
use crate::rewrite::paraphrase::Paraphraser;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable advanced rewriter. Default: HubParaphraser backed by the hosted T5 model.
    pub paraphraser: Arc<dyn Paraphraser>,
}
