// Canned response generation: tone tables, replies, actions, resource plans

mod actions;
mod plan;
mod reply;
mod tone;
mod welcome;

pub use actions::{build_actions, ActionKind, SuggestedAction};
pub use plan::{build_plan, ResourceLink, ResourcePlan};
pub use reply::{generic_replies, select_reply, select_reply_with, CRISIS_REPLY};
pub use tone::{AgeRange, Tone, VisitReason};
pub use welcome::welcome_message;
