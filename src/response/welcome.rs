// Per-tone welcome messages shown when a chat opens or the tone changes

use super::tone::Tone;

pub fn welcome_message(tone: Tone) -> &'static str {
    match tone {
        Tone::Supportive => {
            "Hey there! I'm Liam, and I'm really glad you're here. Taking this step to reach out shows real strength. I'm here to listen, support you, and help connect you with the right resources. What's on your mind today?"
        }
        Tone::Professional => {
            "Hello, I'm Liam, your mental health support companion. I'm here to provide you with evidence-based guidance and connect you with appropriate professional resources. How can I assist you today?"
        }
        Tone::Casual => {
            "Hey! I'm Liam - think of me as that friend who's always got your back. No judgment here, just real talk and genuine support. What's going on, man?"
        }
        Tone::Youthful => {
            "What's up! I'm Liam, and I'm stoked you're here. Mental health is just as important as physical health, and talking about it is actually pretty awesome. What's happening in your world?"
        }
        Tone::Mature => {
            "Good day. I'm Liam, and I understand that reaching out can take considerable courage, especially for men of our generation. I respect your experience and am here to provide thoughtful support. What would you like to discuss?"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_tone_has_distinct_welcome() {
        let messages: Vec<_> = Tone::ALL.iter().map(|t| welcome_message(*t)).collect();
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_unknown_tone_resolves_to_supportive_welcome() {
        let tone = Tone::resolve("martian");
        assert_eq!(welcome_message(tone), welcome_message(Tone::Supportive));
    }
}
