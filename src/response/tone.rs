// Communication tone selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Persona voice for canned replies.
///
/// Tone only affects phrasing, never classification. Unrecognized identifiers
/// resolve to `Supportive` so downstream lookups never handle an unknown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Supportive,
    Professional,
    Casual,
    Youthful,
    Mature,
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Supportive
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Supportive,
        Tone::Professional,
        Tone::Casual,
        Tone::Youthful,
        Tone::Mature,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Supportive => "supportive",
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Youthful => "youthful",
            Tone::Mature => "mature",
        }
    }

    /// Resolve a tone identifier, falling back to supportive for anything
    /// unrecognized. This is the only place unknown identifiers are handled.
    pub fn resolve(id: &str) -> Tone {
        match id.trim().to_lowercase().as_str() {
            "supportive" => Tone::Supportive,
            "professional" => Tone::Professional,
            "casual" => Tone::Casual,
            "youthful" => Tone::Youthful,
            "mature" => Tone::Mature,
            other => {
                if !other.is_empty() {
                    tracing::debug!(tone = other, "Unknown tone, using supportive");
                }
                Tone::Supportive
            }
        }
    }

    /// Infer a starting tone from the intake form's age range and reason for
    /// visit, for users who skip the explicit tone picker. Asking for
    /// professional guidance overrides the age-based default.
    pub fn infer(age_range: AgeRange, reason: VisitReason) -> Tone {
        if reason == VisitReason::ProfessionalGuidance {
            return Tone::Professional;
        }

        match age_range {
            AgeRange::Under25 => Tone::Youthful,
            AgeRange::From25To39 => Tone::Casual,
            AgeRange::From40To54 => Tone::Supportive,
            AgeRange::Over55 => Tone::Mature,
        }
    }
}

/// Age bracket collected on the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeRange {
    Under25,
    From25To39,
    From40To54,
    Over55,
}

/// Reason-for-visit option collected on the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitReason {
    JustTalking,
    StressAndWorry,
    LowMood,
    ProfessionalGuidance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_tones() {
        assert_eq!(Tone::resolve("supportive"), Tone::Supportive);
        assert_eq!(Tone::resolve("Professional"), Tone::Professional);
        assert_eq!(Tone::resolve(" casual "), Tone::Casual);
        assert_eq!(Tone::resolve("YOUTHFUL"), Tone::Youthful);
        assert_eq!(Tone::resolve("mature"), Tone::Mature);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_supportive() {
        assert_eq!(Tone::resolve("martian"), Tone::Supportive);
        assert_eq!(Tone::resolve(""), Tone::Supportive);
    }

    #[test]
    fn test_infer_from_intake() {
        assert_eq!(
            Tone::infer(AgeRange::Under25, VisitReason::JustTalking),
            Tone::Youthful
        );
        assert_eq!(
            Tone::infer(AgeRange::Over55, VisitReason::LowMood),
            Tone::Mature
        );
        // Professional guidance wins over the age default
        assert_eq!(
            Tone::infer(AgeRange::Under25, VisitReason::ProfessionalGuidance),
            Tone::Professional
        );
    }
}
