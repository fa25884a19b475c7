// Message triage: keyword lists and classification

mod detector;
mod keywords;

pub use detector::{Classification, TriageDetector};
pub use keywords::KeywordSets;
