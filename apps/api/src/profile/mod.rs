// Profile analysis: checklist scoring, summary and keywords, grammar checks, input decoding.
// Every heuristic is a pure function of the profile text.

pub mod checklist;
pub mod grammar;
pub mod handlers;
pub mod input;
pub mod keywords;
