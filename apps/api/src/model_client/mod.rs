/// Model Client: the single point of entry for all Hugging Face model calls.
///
/// ARCHITECTURAL RULE: No other module may talk to the hub or the inference endpoint directly.
///
/// The paraphrasing model handle is loaded once per process and never invalidated.
/// A failed load is not cached, so the next request attempts it again.
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// The paraphrasing model used for every advanced rewrite.
/// Hardcoded so deployments cannot drift to a different model.
pub const MODEL: &str = "ramsrigouthamg/t5_paraphraser";
const TEXT2TEXT_PIPELINE: &str = "text2text-generation";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model '{0}' was not found on the hub")]
    NotFound(String),

    #[error("Model '{model}' serves pipeline {pipeline:?}, expected text2text-generation")]
    UnsupportedPipeline {
        model: String,
        pipeline: Option<String>,
    },

    #[error("Model returned no generated text")]
    EmptyOutput,
}

/// Where to find the hub and the inference endpoint, and how to authenticate.
#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub hub_url: String,
    pub inference_url: String,
    pub api_token: Option<String>,
}

/// Decoding parameters forwarded verbatim to the generation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub max_length: u32,
    pub truncation: bool,
    pub do_sample: bool,
    pub top_k: u32,
    pub top_p: f32,
    pub early_stopping: bool,
    pub num_return_sequences: u32,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParameters,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    /// Block until the hosted model is warm instead of failing with 503.
    wait_for_model: bool,
    use_cache: bool,
}

#[derive(Debug, Deserialize)]
pub struct GeneratedText {
    pub generated_text: String,
}

/// The pipeline answers with a list for batched inputs and a bare object otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Many(Vec<GeneratedText>),
    One(GeneratedText),
}

impl InferenceResponse {
    fn into_first(self) -> Option<String> {
        match self {
            InferenceResponse::Many(list) => list.into_iter().next().map(|g| g.generated_text),
            InferenceResponse::One(g) => Some(g.generated_text),
        }
    }
}

#[derive(Debug, Deserialize)]
struct HubModelInfo {
    id: String,
    pipeline_tag: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HubError {
    error: String,
}

/// A resolved model: metadata verified on the hub plus a client bound to its endpoint.
#[derive(Debug)]
pub struct LoadedModel {
    client: Client,
    model_id: String,
    endpoint: String,
    api_token: Option<String>,
}

static PARAPHRASE_MODEL: OnceCell<LoadedModel> = OnceCell::const_new();

/// Returns the process-wide paraphrasing model, loading it on first use.
///
/// Concurrent first callers wait on the same initialization.
pub async fn paraphrase_model(settings: &ModelSettings) -> Result<&'static LoadedModel, ModelError> {
    PARAPHRASE_MODEL
        .get_or_try_init(|| LoadedModel::load(MODEL, settings))
        .await
}

impl LoadedModel {
    /// Resolves `model` on the hub and checks it is a text-to-text generation model.
    pub async fn load(model: &str, settings: &ModelSettings) -> Result<Self, ModelError> {
        info!("Loading model {model} from {}", settings.hub_url);
        let client = Client::builder().build()?;

        let url = format!("{}/api/models/{}", settings.hub_url.trim_end_matches('/'), model);
        let response = authorize(client.get(&url), settings.api_token.as_deref())
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(ModelError::NotFound(model.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), body));
        }

        let info: HubModelInfo = response.json().await?;
        let supported = matches!(info.pipeline_tag.as_deref(), None | Some(TEXT2TEXT_PIPELINE));
        if !supported {
            return Err(ModelError::UnsupportedPipeline {
                model: info.id,
                pipeline: info.pipeline_tag,
            });
        }

        let endpoint = format!(
            "{}/models/{}",
            settings.inference_url.trim_end_matches('/'),
            info.id
        );
        info!("Model {} ready at {endpoint}", info.id);

        Ok(Self {
            client,
            model_id: info.id,
            endpoint,
            api_token: settings.api_token.clone(),
        })
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Runs one generation call. No retries: a failure is returned to the caller as-is.
    pub async fn generate(
        &self,
        inputs: &str,
        parameters: &GenerationParameters,
    ) -> Result<String, ModelError> {
        let body = InferenceRequest {
            inputs,
            parameters,
            options: InferenceOptions {
                wait_for_model: true,
                use_cache: false,
            },
        };

        let response = authorize(self.client.post(&self.endpoint), self.api_token.as_deref())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(api_error(status.as_u16(), text));
        }

        let parsed: InferenceResponse = serde_json::from_str(&text)?;
        let generated = parsed
            .into_first()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ModelError::EmptyOutput)?;

        debug!(
            "Generation succeeded: model={}, input_chars={}, output_chars={}",
            self.model_id,
            inputs.chars().count(),
            generated.chars().count()
        );
        Ok(generated)
    }
}

fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

fn api_error(status: u16, body: String) -> ModelError {
    let message = serde_json::from_str::<HubError>(&body)
        .map(|e| e.error)
        .unwrap_or(body);
    ModelError::Api { status, message }
}
