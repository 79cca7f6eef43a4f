// Prompt template and decoding parameters for the paraphrasing model.

use crate::model_client::GenerationParameters;

/// Paraphrase prompt template. Replace `{text}` before sending.
/// The trailing `</s>` is the T5 end-of-sequence marker.
pub const PARAPHRASE_PROMPT_TEMPLATE: &str = "paraphrase: {text} </s>";

/// Fixed sampling setup: top-k 120, nucleus 0.95, one sequence of at most 256 tokens.
///
/// `max_length` bounds generation only. Over-long input is cut by the hosted
/// pipeline at the tokenizer's own limit, which `truncation` enables.
pub const PARAPHRASE_PARAMETERS: GenerationParameters = GenerationParameters {
    max_length: 256,
    truncation: true,
    do_sample: true,
    top_k: 120,
    top_p: 0.95,
    early_stopping: true,
    num_return_sequences: 1,
};

pub fn build_paraphrase_prompt(text: &str) -> String {
    PARAPHRASE_PROMPT_TEMPLATE.replace("{text}", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_wraps_text_with_prefix_and_eos() {
        assert_eq!(
            build_paraphrase_prompt("I build APIs."),
            "paraphrase: I build APIs. </s>"
        );
    }

    #[test]
    fn test_prompt_does_not_expand_placeholders_inside_text() {
        assert_eq!(
            build_paraphrase_prompt("literal {text} here"),
            "paraphrase: literal {text} here </s>"
        );
    }

    #[test]
    fn test_parameters_enable_pipeline_truncation_and_bound_output() {
        let value = serde_json::to_value(&PARAPHRASE_PARAMETERS).unwrap();
        assert_eq!(value["truncation"], true);
        assert_eq!(value["max_length"], 256);
        assert_eq!(value["num_return_sequences"], 1);
    }
}
