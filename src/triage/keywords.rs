// Keyword lists for message triage

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fixed term lists matched against user messages.
///
/// Matching is case-insensitive substring containment. The built-in defaults
/// are compiled in; a JSON file with the same shape can override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordSets {
    pub crisis: Vec<String>,
    pub anxiety: Vec<String>,
    pub depression: Vec<String>,
}

const CRISIS_TERMS: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "end it all",
    "want to die",
    "hurt myself",
    "self-harm",
    "cutting",
    "overdose",
    "can't go on",
    "no point",
    "better off dead",
    "harm myself",
];

const ANXIETY_TERMS: &[&str] = &[
    "anxious",
    "anxiety",
    "panic",
    "overwhelmed",
    "racing thoughts",
    "trouble sleeping",
    "can't stop worrying",
    "on edge",
];

const DEPRESSION_TERMS: &[&str] = &[
    "depressed",
    "depression",
    "hopeless",
    "worthless",
    "no motivation",
    "isolated",
    "numb",
    "no energy",
    "lost interest",
];

impl Default for KeywordSets {
    fn default() -> Self {
        fn owned(terms: &[&str]) -> Vec<String> {
            terms.iter().map(|t| t.to_string()).collect()
        }

        Self {
            crisis: owned(CRISIS_TERMS),
            anxiety: owned(ANXIETY_TERMS),
            depression: owned(DEPRESSION_TERMS),
        }
    }
}

impl KeywordSets {
    /// Load keyword sets from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read keywords file: {}", path.display()))?;

        let sets: KeywordSets =
            serde_json::from_str(&contents).context("Failed to parse keywords JSON")?;

        Ok(sets)
    }

    /// Total number of terms across all lists
    pub fn term_count(&self) -> usize {
        self.crisis.len() + self.anxiety.len() + self.depression.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_nonempty() {
        let sets = KeywordSets::default();
        assert!(!sets.crisis.is_empty());
        assert!(!sets.anxiety.is_empty());
        assert!(!sets.depression.is_empty());
        assert_eq!(sets.term_count(), 13 + 8 + 9);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"crisis": ["suicide"], "anxiety": ["panic"], "depression": ["hopeless"]}}"#
        )
        .unwrap();

        let sets = KeywordSets::load_from_file(file.path()).unwrap();
        assert_eq!(sets.crisis, vec!["suicide"]);
        assert_eq!(sets.term_count(), 3);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = KeywordSets::load_from_file(Path::new("/nonexistent/keywords.json"));
        assert!(result.is_err());
    }
}
