// Rewriters: sentence capitalization, hosted-model paraphrasing, tone substitution.
// Model calls go through model_client only.

pub mod handlers;
pub mod paraphrase;
pub mod prompts;
pub mod simple;
pub mod tone;
