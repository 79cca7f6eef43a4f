//! Tone changer: fixed string substitutions keyed by the selected tone.
//!
//! Each substitution replaces every occurrence of its pattern in one pass,
//! applied in the listed order.

use serde::{Deserialize, Serialize};

use crate::errors::{require_min_chars, AppError};

pub const MIN_TONE_CHARS: usize = 10;
pub const TONE_MORE_TEXT_WARNING: &str = "Please enter more text to change tone.";

const FRIENDLY_GREETING: &str = "Hey! 😊 ";
const CONFIDENT_CLOSING: &str = " 💪 I am highly motivated and confident in my skills.";

/// The three selectable tones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    #[serde(alias = "formal")]
    Formal,
    #[serde(alias = "friendly")]
    Friendly,
    #[serde(alias = "confident")]
    Confident,
}

/// Substitution table and framing for a tone.
#[derive(Debug, Clone)]
pub struct ToneRules {
    pub replacements: Vec<(&'static str, &'static str)>,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

pub fn get_tone_rules(tone: Tone) -> ToneRules {
    match tone {
        Tone::Formal => ToneRules {
            replacements: vec![("I'm", "I am"), ("I've", "I have"), ("don't", "do not")],
            prefix: "",
            suffix: "",
        },
        Tone::Friendly => ToneRules {
            replacements: vec![("I am", "I'm"), ("I have", "I've")],
            prefix: FRIENDLY_GREETING,
            suffix: "",
        },
        Tone::Confident => ToneRules {
            replacements: vec![],
            prefix: "",
            suffix: CONFIDENT_CLOSING,
        },
    }
}

/// Pure transform from (text, tone) to the rewritten text.
pub fn apply_tone(text: &str, tone: Tone) -> String {
    let rules = get_tone_rules(tone);
    let body = rules
        .replacements
        .iter()
        .fold(text.to_string(), |acc, &(from, to)| acc.replace(from, to));
    format!("{}{}{}", rules.prefix, body, rules.suffix)
}

/// Guarded entry point used by the handler.
pub fn change_tone(text: &str, tone: Tone) -> Result<String, AppError> {
    require_min_chars(text, MIN_TONE_CHARS, TONE_MORE_TEXT_WARNING)?;
    Ok(apply_tone(text, tone))
}
