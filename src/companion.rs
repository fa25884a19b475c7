// The four pure companion operations
//
// Everything here is synchronous, stateless per turn, and safe to call on
// every send event. The tables are built once at startup and shared by
// reference.

use rand::Rng;

use crate::response::{
    build_actions, build_plan, select_reply, select_reply_with, welcome_message, ResourcePlan,
    SuggestedAction, Tone,
};
use crate::triage::{Classification, KeywordSets, TriageDetector};

/// Facade over the triage detector and the canned-response tables.
///
/// Holds the immutable keyword configuration; each method recomputes its
/// result from the message alone, with no cross-turn memory.
#[derive(Clone)]
pub struct Companion {
    detector: TriageDetector,
}

impl Default for Companion {
    fn default() -> Self {
        Self::new(KeywordSets::default())
    }
}

impl Companion {
    pub fn new(keywords: KeywordSets) -> Self {
        Self {
            detector: TriageDetector::new(keywords),
        }
    }

    /// Classify a message into independent crisis/anxiety/depression flags
    pub fn classify(&self, message: &str) -> Classification {
        self.detector.classify(message)
    }

    /// Select the canned reply for a message and tone
    pub fn select_reply(&self, message: &str, tone: Tone) -> String {
        select_reply(self.classify(message), tone)
    }

    /// Select the canned reply with an explicit random source
    pub fn select_reply_with<R: Rng>(
        &self,
        message: &str,
        tone: Tone,
        rng: &mut R,
    ) -> String {
        select_reply_with(self.classify(message), tone, rng)
    }

    /// Build the ordered suggested-action list for a message
    pub fn suggested_actions(&self, message: &str) -> Vec<SuggestedAction> {
        build_actions(self.classify(message))
    }

    /// Build the resource plan for a message
    pub fn resource_plan(&self, message: &str) -> ResourcePlan {
        build_plan(self.classify(message))
    }

    /// Welcome message for a tone, shown when a chat opens
    pub fn welcome(&self, tone: Tone) -> &'static str {
        welcome_message(tone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{generic_replies, ActionKind, CRISIS_REPLY};

    #[test]
    fn test_anxious_message_example() {
        let companion = Companion::default();
        let message = "I feel anxious and overwhelmed";

        let c = companion.classify(message);
        assert!(!c.is_crisis);
        assert!(c.has_anxiety);
        assert!(!c.has_depression);

        let reply = companion.select_reply(message, Tone::Professional);
        assert!(reply.contains("anxiety"));
        assert!(reply.contains("evidence-based"));

        let actions = companion.suggested_actions(message);
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].kind, ActionKind::Assessment);
        assert_eq!(actions[1].kind, ActionKind::Support);
    }

    #[test]
    fn test_crisis_message_example() {
        let companion = Companion::default();
        let message = "I want to kill myself";

        assert!(companion.classify(message).is_crisis);
        assert_eq!(companion.select_reply(message, Tone::Casual), CRISIS_REPLY);

        let plan = companion.resource_plan(message);
        assert!(plan.summary.contains("safety"));
    }

    #[test]
    fn test_clear_message_example() {
        let companion = Companion::default();
        let message = "life is great today";

        assert!(companion.classify(message).is_clear());

        let reply = companion.select_reply(message, Tone::Youthful);
        assert!(generic_replies(Tone::Youthful).contains(&reply.as_str()));

        let plan = companion.resource_plan(message);
        assert!(plan.summary.contains("wellbeing"));
    }
}
