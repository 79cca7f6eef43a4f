//! Advanced rewriter: pluggable, trait-based paraphrasing backend.
//!
//! Default: `HubParaphraser` (hosted T5 paraphrasing model via `model_client`).
//! `AppState` holds an `Arc<dyn Paraphraser>`, chosen at startup.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::{require_min_chars, AppError};
use crate::model_client::{paraphrase_model, ModelSettings};
use crate::rewrite::prompts::{build_paraphrase_prompt, PARAPHRASE_PARAMETERS};
use crate::rewrite::simple::REWRITE_MORE_TEXT_WARNING;

pub const MIN_PARAPHRASE_CHARS: usize = 10;

/// The paraphraser trait. Implement this to swap backends without touching the handler.
#[async_trait]
pub trait Paraphraser: Send + Sync {
    async fn paraphrase(&self, text: &str) -> Result<String, AppError>;

    /// Short backend name reported alongside results.
    fn backend(&self) -> &'static str;
}

/// Paraphrases through the hosted model. The model handle itself is the
/// process-wide singleton in `model_client`; this type only carries settings.
pub struct HubParaphraser {
    settings: ModelSettings,
}

impl HubParaphraser {
    pub fn new(settings: ModelSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl Paraphraser for HubParaphraser {
    async fn paraphrase(&self, text: &str) -> Result<String, AppError> {
        let model = paraphrase_model(&self.settings)
            .await
            .map_err(|e| AppError::Paraphrase(format!("model load failed: {e}")))?;

        let prompt = build_paraphrase_prompt(text);
        debug!("Paraphrasing with {}", model.model_id());
        model
            .generate(&prompt, &PARAPHRASE_PARAMETERS)
            .await
            .map_err(|e| AppError::Paraphrase(format!("inference failed: {e}")))
    }

    fn backend(&self) -> &'static str {
        "huggingface"
    }
}

/// Guarded entry point used by the handler.
pub async fn rewrite_advanced(text: &str, paraphraser: &dyn Paraphraser) -> Result<String, AppError> {
    require_min_chars(text, MIN_PARAPHRASE_CHARS, REWRITE_MORE_TEXT_WARNING)?;

    info!(
        "Paraphrasing {} chars via {}",
        text.chars().count(),
        paraphraser.backend()
    );
    paraphraser.paraphrase(text).await
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Deterministic stand-in: echoes the text reversed word by word.
    #[derive(Default)]
    pub struct EchoParaphraser {
        pub calls: AtomicUsize,
    }

    #[async_trait]
    impl Paraphraser for EchoParaphraser {
        async fn paraphrase(&self, text: &str) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(text.split_whitespace().rev().collect::<Vec<_>>().join(" "))
        }

        fn backend(&self) -> &'static str {
            "echo"
        }
    }

    /// Always fails, like an unreachable model.
    pub struct FailingParaphraser;

    #[async_trait]
    impl Paraphraser for FailingParaphraser {
        async fn paraphrase(&self, _text: &str) -> Result<String, AppError> {
            Err(AppError::Paraphrase("model unavailable".to_string()))
        }

        fn backend(&self) -> &'static str {
            "failing"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{EchoParaphraser, FailingParaphraser};
    use super::*;
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_short_input_never_reaches_model() {
        let backend = EchoParaphraser::default();
        let err = rewrite_advanced("too short", &backend).await.unwrap_err();
        assert!(matches!(err, AppError::InsufficientInput { min_chars: 10, .. }));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_long_enough_input_is_paraphrased() {
        let backend = EchoParaphraser::default();
        let out = rewrite_advanced("I build reliable systems", &backend)
            .await
            .unwrap();
        assert_eq!(out, "systems reliable build I");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_backend_failure_is_surfaced() {
        let err = rewrite_advanced("I build reliable systems", &FailingParaphraser)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Paraphrase(_)));
    }

    #[tokio::test]
    async fn test_hub_paraphraser_reports_unreachable_hub() {
        // Port 9 (discard) on localhost is closed in test environments.
        let backend = HubParaphraser::new(ModelSettings {
            hub_url: "http://127.0.0.1:9".to_string(),
            inference_url: "http://127.0.0.1:9".to_string(),
            api_token: None,
        });
        let err = backend.paraphrase("some profile text").await.unwrap_err();
        match err {
            AppError::Paraphrase(msg) => assert!(msg.starts_with("model load failed")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
