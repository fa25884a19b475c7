// Canned reply selection by classification and tone

use rand::Rng;

use super::tone::Tone;
use crate::triage::Classification;

/// The single crisis response, returned verbatim regardless of tone. Crisis
/// detection is terminal for the turn: nothing else is generated and the
/// remote backend is never consulted.
pub const CRISIS_REPLY: &str = "I'm really concerned about what you're sharing with me. \
    Your safety is the most important thing right now. Please consider reaching out to a \
    crisis counselor immediately at 1-833-456-4566. They're available 24/7 and can provide \
    immediate support. You don't have to go through this alone - there are people who want \
    to help you right now.";

const ANXIETY_BASE: &str = "It sounds like anxiety has been weighing on you, and those \
    racing, restless feelings can be exhausting to carry.";

const DEPRESSION_BASE: &str = "It sounds like you've been carrying a heavy low mood, and \
    that can drain the color out of everything.";

const COMBINED_BASE: &str = "It sounds like you're dealing with both anxious feelings and \
    a low mood at the same time, and that's a lot for anyone to carry.";

/// Tone-specific suffix appended to the anxiety, depression, and combined
/// base sentences.
fn tone_suffix(tone: Tone) -> &'static str {
    match tone {
        Tone::Supportive => {
            " I'm here with you, and together we can find the kind of support that actually helps."
        }
        Tone::Professional => {
            " I can connect you with evidence-based resources and qualified professionals who specialize in this area."
        }
        Tone::Casual => {
            " A lot of guys deal with this stuff, and there are some really solid ways to get a handle on it."
        }
        Tone::Youthful => {
            " Seriously, props for talking about it. There are some great tools that can help you feel more in control."
        }
        Tone::Mature => {
            " There's real wisdom in acknowledging it, and thoughtful support is available that respects your experience."
        }
    }
}

/// Three generic supportive strings per tone, used when no flag is set.
fn generic_variants(tone: Tone) -> [&'static str; 3] {
    match tone {
        Tone::Supportive => [
            "I hear you, and what you're feeling makes complete sense. Many men go through similar experiences, and it takes real courage to talk about it.",
            "Thank you for sharing that with me. Your feelings are valid, and I want you to know that there are people and resources that can help.",
            "I'm glad you felt comfortable enough to open up about this. Let's explore some ways we can get you the support you deserve.",
        ],
        Tone::Professional => [
            "Based on what you've shared, I can connect you with evidence-based resources and qualified professionals who specialize in this area.",
            "Your concerns align with common mental health challenges that many Canadian men face. There are established treatment protocols that can be very effective.",
            "I recommend we connect you with a licensed mental health professional who can provide personalized assessment and treatment options.",
        ],
        Tone::Casual => [
            "Man, that sounds really tough. But you know what? You're not alone in this - a lot of guys deal with similar stuff, they just don't always talk about it.",
            "I get it, life can throw some serious curveballs. The good news is there are some really solid people and resources that can help you work through this.",
            "Thanks for being real with me. Let's figure out how to get you connected with some people who can actually make a difference.",
        ],
        Tone::Youthful => [
            "Dude, first off - major props for being brave enough to talk about this stuff. That's actually super mature and shows you're taking charge of your mental health.",
            "I totally get that this feels overwhelming right now. But here's the thing - there are amazing resources and people who can help you navigate this.",
            "You're already doing something awesome by reaching out. Let's connect you with some people who really know their stuff and can help you feel better.",
        ],
        Tone::Mature => [
            "I appreciate you sharing this with me. Life's challenges can indeed feel overwhelming, particularly when we feel we should handle everything on our own.",
            "Your experience resonates with many men who've walked similar paths. There's wisdom in seeking support, and it shows maturity and self-awareness.",
            "Let me connect you with resources that respect your experience and can provide the thoughtful, professional support you deserve.",
        ],
    }
}

/// Select the canned reply for a classified message.
///
/// Takes an explicit random source so callers (and tests) can control the
/// pick among generic variants; only the no-flag branch consumes randomness.
pub fn select_reply_with<R: Rng>(
    classification: Classification,
    tone: Tone,
    rng: &mut R,
) -> String {
    if classification.is_crisis {
        return CRISIS_REPLY.to_string();
    }

    match (classification.has_anxiety, classification.has_depression) {
        (true, true) => format!("{}{}", COMBINED_BASE, tone_suffix(tone)),
        (true, false) => format!("{}{}", ANXIETY_BASE, tone_suffix(tone)),
        (false, true) => format!("{}{}", DEPRESSION_BASE, tone_suffix(tone)),
        (false, false) => {
            let variants = generic_variants(tone);
            variants[rng.gen_range(0..variants.len())].to_string()
        }
    }
}

/// Convenience wrapper using the thread RNG
pub fn select_reply(classification: Classification, tone: Tone) -> String {
    select_reply_with(classification, tone, &mut rand::thread_rng())
}

/// All generic variants for a tone, exposed for "one of N known strings"
/// assertions and for the REPL's `/tones` preview.
pub fn generic_replies(tone: Tone) -> [&'static str; 3] {
    generic_variants(tone)
}
