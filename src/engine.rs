// Conversational turn engine
//
// Runs one turn: classify, crisis short-circuit, otherwise delegate the
// free-form reply to the hosted backend with fallback to the canned tone
// reply. Actions and the resource plan are computed synchronously for every
// turn.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::backend::{BackendRequest, ChatBackend};
use crate::companion::Companion;
use crate::conversation::ConversationHistory;
use crate::response::{ResourcePlan, SuggestedAction, Tone};
use crate::triage::Classification;

/// Where the reply text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// Fixed crisis response, backend never consulted
    Crisis,
    /// Free-form reply from the hosted backend
    Backend,
    /// Canned tone reply (no backend configured, or the call failed)
    Canned,
}

/// Everything produced for one conversational turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub classification: Classification,
    pub reply: String,
    pub reply_source: ReplySource,
    pub actions: Vec<SuggestedAction>,
    pub plan: ResourcePlan,
}

/// Persona instruction sent to the backend alongside the conversation
fn system_prompt(tone: Tone) -> String {
    format!(
        "You are Liam, a mental health companion for Canadian men. \
        Respond in a {} voice: {}. Be warm, never clinical diagnoses, \
        and encourage professional support where appropriate.",
        tone.label(),
        match tone {
            Tone::Supportive => "warm, empathetic, understanding",
            Tone::Professional => "clinical, evidence-based, structured",
            Tone::Casual => "friendly, relaxed, approachable",
            Tone::Youthful => "energetic, modern, relatable",
            Tone::Mature => "respectful, experienced, thoughtful",
        }
    )
}

/// Drives conversational turns for the server and the REPL
pub struct TurnEngine {
    companion: Companion,
    backend: Option<Arc<dyn ChatBackend>>,
}

impl TurnEngine {
    pub fn new(companion: Companion, backend: Option<Arc<dyn ChatBackend>>) -> Self {
        Self { companion, backend }
    }

    pub fn companion(&self) -> &Companion {
        &self.companion
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Run one turn. `history` must already contain the new user message.
    ///
    /// The crisis reply is produced without waiting on the backend. For all
    /// other classifications the backend supplies the free-form reply when
    /// available, with the canned tone reply as fallback.
    pub async fn run_turn(
        &self,
        history: &ConversationHistory,
        message: &str,
        tone: Tone,
    ) -> TurnOutcome {
        let classification = self.companion.classify(message);
        let actions = self.companion.suggested_actions(message);
        let plan = self.companion.resource_plan(message);

        if classification.is_crisis {
            tracing::warn!("Crisis turn, short-circuiting backend");
            return TurnOutcome {
                classification,
                reply: self.companion.select_reply(message, tone),
                reply_source: ReplySource::Crisis,
                actions,
                plan,
            };
        }

        let (reply, reply_source) = match &self.backend {
            Some(backend) => {
                let request =
                    BackendRequest::new(history.messages()).with_system(system_prompt(tone));

                match backend.send_message(&request).await {
                    Ok(response) => (response.content, ReplySource::Backend),
                    Err(e) => {
                        tracing::warn!(
                            backend = backend.name(),
                            error = %e,
                            "Backend call failed, using canned reply"
                        );
                        (
                            self.companion.select_reply(message, tone),
                            ReplySource::Canned,
                        )
                    }
                }
            }
            None => (
                self.companion.select_reply(message, tone),
                ReplySource::Canned,
            ),
        };

        TurnOutcome {
            classification,
            reply,
            reply_source,
            actions,
            plan,
        }
    }
}
