// Message triage detector

use serde::{Deserialize, Serialize};

use super::keywords::KeywordSets;

/// Classification flags for a single user message.
///
/// The three flags are computed independently from the same message. They are
/// not mutually exclusive, except that a crisis detection suppresses all other
/// response generation downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub is_crisis: bool,
    pub has_anxiety: bool,
    pub has_depression: bool,
}

impl Classification {
    /// True when no flag is set
    pub fn is_clear(&self) -> bool {
        !self.is_crisis && !self.has_anxiety && !self.has_depression
    }
}

#[derive(Clone)]
pub struct TriageDetector {
    keywords: KeywordSets,
}

impl Default for TriageDetector {
    fn default() -> Self {
        Self::new(KeywordSets::default())
    }
}

impl TriageDetector {
    pub fn new(keywords: KeywordSets) -> Self {
        Self { keywords }
    }

    /// Classify a message into crisis / anxiety / depression flags.
    ///
    /// Matching is plain substring containment against the lower-cased
    /// message, with short-circuit OR over each list. A term embedded in a
    /// longer word still matches; no word-boundary check is applied.
    pub fn classify(&self, message: &str) -> Classification {
        let lower = message.to_lowercase();

        let is_crisis = Self::contains_any(&lower, &self.keywords.crisis);
        if is_crisis {
            tracing::warn!("Crisis language detected in message");
        }

        Classification {
            is_crisis,
            has_anxiety: Self::contains_any(&lower, &self.keywords.anxiety),
            has_depression: Self::contains_any(&lower, &self.keywords.depression),
        }
    }

    fn contains_any(lower: &str, terms: &[String]) -> bool {
        terms.iter().any(|term| lower.contains(&term.to_lowercase()))
    }

    pub fn keywords(&self) -> &KeywordSets {
        &self.keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crisis_detection() {
        let detector = TriageDetector::default();

        assert!(detector.classify("I want to kill myself").is_crisis);
        assert!(detector.classify("I've been thinking about suicide").is_crisis);
        assert!(detector.classify("sometimes I feel better off dead").is_crisis);
        assert!(!detector.classify("What is the meaning of life?").is_crisis);
    }

    #[test]
    fn test_case_insensitive() {
        let detector = TriageDetector::default();

        assert!(detector.classify("SUICIDE").is_crisis);
        assert!(detector.classify("SuIcIdE").is_crisis);
        assert!(detector.classify("I Feel So ANXIOUS").has_anxiety);
    }

    #[test]
    fn test_independent_flags() {
        let detector = TriageDetector::default();

        let c = detector.classify("I feel anxious and hopeless lately");
        assert!(!c.is_crisis);
        assert!(c.has_anxiety);
        assert!(c.has_depression);
    }

    #[test]
    fn test_crisis_does_not_clear_other_flags() {
        // Flags stay independent at this layer; the short-circuit happens in
        // response selection, not here.
        let detector = TriageDetector::default();

        let c = detector.classify("I'm anxious and I want to die");
        assert!(c.is_crisis);
        assert!(c.has_anxiety);
    }

    #[test]
    fn test_substring_match_without_word_boundary() {
        // Known behavior: embedded substrings still match.
        let detector = TriageDetector::default();

        assert!(detector.classify("the cuttings from the garden").is_crisis);
    }

    #[test]
    fn test_empty_message_is_clear() {
        let detector = TriageDetector::default();

        assert!(detector.classify("").is_clear());
        assert!(detector.classify("life is great today").is_clear());
    }
}
