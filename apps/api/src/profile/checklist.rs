//! Profile checklist: scores how many well-known profile sections a text mentions.
//!
//! Matching is plain case-insensitive substring containment on the label.
//! A label embedded inside an unrelated word still counts as present.

use serde::{Deserialize, Serialize};

/// One labeled topic a complete profile is expected to cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistEntry {
    pub label: &'static str,
    pub description: &'static str,
}

/// The fixed checklist, in display order.
pub const PROFILE_CHECKLIST: &[ChecklistEntry] = &[
    ChecklistEntry {
        label: "Profile Picture",
        description: "Clear, professional photo with good lighting and appropriate attire.",
    },
    ChecklistEntry {
        label: "Background Image",
        description: "Relevant, visually appealing banner image.",
    },
    ChecklistEntry {
        label: "Headline",
        description: "Describes current role or career aspirations with industry keywords.",
    },
    ChecklistEntry {
        label: "Summary/About",
        description: "Impactful summary with career highlights, values, and aspirations.",
    },
    ChecklistEntry {
        label: "Experience",
        description: "Detailed job descriptions with achievements, responsibilities, and quantifiable results.",
    },
    ChecklistEntry {
        label: "Skills",
        description: "Relevant skills endorsed by connections.",
    },
    ChecklistEntry {
        label: "Recommendations",
        description: "Genuine recommendations highlighting skills and work ethics.",
    },
    ChecklistEntry {
        label: "Education",
        description: "Degrees, certifications, and relevant coursework listed clearly.",
    },
    ChecklistEntry {
        label: "Certifications",
        description: "Professional certifications from recognized platforms or institutions.",
    },
    ChecklistEntry {
        label: "Projects",
        description: "Notable projects described with scope and impact.",
    },
    ChecklistEntry {
        label: "Achievements",
        description: "Awards, recognitions, milestones, and notable accomplishments.",
    },
    ChecklistEntry {
        label: "Activity",
        description: "Regular engagement: posts, comments, shares on relevant topics.",
    },
    ChecklistEntry {
        label: "Networking",
        description: "Professional network with 300+ connections.",
    },
    ChecklistEntry {
        label: "Contact Information",
        description: "Professional email and links to portfolio, website, or blog.",
    },
    ChecklistEntry {
        label: "Custom LinkedIn URL",
        description: "Personalized LinkedIn URL.",
    },
    ChecklistEntry {
        label: "SEO and Keywords",
        description: "Industry-relevant keywords throughout the profile for search visibility.",
    },
    ChecklistEntry {
        label: "Volunteering & Interests",
        description: "Volunteer work and personal interests showing personality and social responsibility.",
    },
    ChecklistEntry {
        label: "Languages",
        description: "Languages spoken with proficiency levels.",
    },
    ChecklistEntry {
        label: "Multimedia",
        description: "Portfolio, presentations, videos, or documents showcasing work.",
    },
    ChecklistEntry {
        label: "Profile Activity Stats",
        description: "Shows metrics like profile views, search appearances, and content engagement.",
    },
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRating {
    Excellent,
    Great,
    Decent,
    Incomplete,
}

impl ScoreRating {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 100 => ScoreRating::Excellent,
            s if s >= 80 => ScoreRating::Great,
            s if s >= 60 => ScoreRating::Decent,
            _ => ScoreRating::Incomplete,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreRating::Excellent => "Excellent! Your LinkedIn profile is fully optimized!",
            ScoreRating::Great => "Great profile! Minor improvements possible.",
            ScoreRating::Decent => "Profile is decent but needs several improvements.",
            ScoreRating::Incomplete => "Profile is incomplete. Major improvements needed.",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub matched: usize,
    pub total: usize,
    /// floor(100 * matched / total), always within 0..=100.
    pub score: u32,
    pub rating: ScoreRating,
    pub rating_message: String,
    /// Unmatched entries, in checklist order.
    pub missing: Vec<ChecklistEntry>,
    /// One suggestion per missing entry, or a single congratulation when nothing is missing.
    pub suggestions: Vec<String>,
}

/// Scores `text` against the built-in profile checklist.
pub fn score_profile(text: &str) -> ScoreResult {
    score_against(text, PROFILE_CHECKLIST)
}

/// Scores `text` against an arbitrary checklist.
pub fn score_against(text: &str, checklist: &[ChecklistEntry]) -> ScoreResult {
    let text_lower = text.to_lowercase();
    let total = checklist.len();

    let missing: Vec<ChecklistEntry> = checklist
        .iter()
        .filter(|entry| !text_lower.contains(&entry.label.to_lowercase()))
        .copied()
        .collect();
    let matched = total - missing.len();

    let score = if total == 0 {
        0
    } else {
        (matched * 100 / total) as u32
    };
    let rating = ScoreRating::from_score(score);

    let suggestions = if missing.is_empty() {
        vec!["Your profile covers all major sections! Excellent job!".to_string()]
    } else {
        missing
            .iter()
            .map(|e| format!("Missing: {} → {}", e.label, e.description))
            .collect()
    };

    ScoreResult {
        matched,
        total,
        score,
        rating,
        rating_message: rating.message().to_string(),
        missing,
        suggestions,
    }
}
