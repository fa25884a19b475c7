// Suggested follow-up actions shown next to a reply

use serde::{Deserialize, Serialize};

use crate::triage::Classification;

/// What kind of follow-up an action represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Assessment,
    Support,
    Group,
}

/// A labeled link offered alongside the reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedAction {
    pub label: String,
    pub url: String,
    pub kind: ActionKind,
}

impl SuggestedAction {
    fn new(label: &str, url: &str, kind: ActionKind) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
            kind,
        }
    }
}

fn anxiety_assessment() -> SuggestedAction {
    SuggestedAction::new(
        "Anxiety Self-Check (MindFit Toolkit)",
        "https://menshealthfoundation.ca/mindfit-toolkit/",
        ActionKind::Assessment,
    )
}

fn depression_assessment() -> SuggestedAction {
    SuggestedAction::new(
        "Depression Self-Check (Men's Health Check)",
        "https://menshealthfoundation.ca/mens-health-check/",
        ActionKind::Assessment,
    )
}

fn crisis_support_line() -> SuggestedAction {
    SuggestedAction::new(
        "24/7 Crisis Support Line",
        "tel:1-833-456-4566",
        ActionKind::Support,
    )
}

/// Build the ordered action list for a classified message.
///
/// Order is fixed: anxiety assessment (if flagged), depression assessment
/// (if flagged), then the support line. The support line is always present
/// and always last, including on crisis turns.
pub fn build_actions(classification: Classification) -> Vec<SuggestedAction> {
    let mut actions = Vec::with_capacity(3);

    if classification.has_anxiety {
        actions.push(anxiety_assessment());
    }
    if classification.has_depression {
        actions.push(depression_assessment());
    }
    actions.push(crisis_support_line());

    actions
}
