// Resource plan templates selected by classification

use serde::{Deserialize, Serialize};

use crate::triage::Classification;

/// A linked resource inside a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl ResourceLink {
    fn new(title: &str, url: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            description: description.to_string(),
        }
    }
}

/// Structured static document of advice, links and next steps, chosen by
/// classification and independent of the live AI-generated reply. Tone does
/// not affect plan content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePlan {
    pub summary: String,
    pub key_advice: Vec<String>,
    pub recommended_links: Vec<ResourceLink>,
    pub next_steps: Vec<String>,
}

fn crisis_support_link() -> ResourceLink {
    ResourceLink::new(
        "24/7 Crisis Support Line",
        "tel:1-833-456-4566",
        "Professional crisis intervention available 24 hours",
    )
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn crisis_plan() -> ResourcePlan {
    ResourcePlan {
        summary: "What you've shared suggests you may be in immediate distress. Your safety \
            comes first. Please connect with a crisis counselor right away; they are trained \
            for exactly this moment and available around the clock."
            .to_string(),
        key_advice: strings(&[
            "Call the 24/7 crisis line now, or 911 if you are in immediate danger",
            "Stay with someone you trust, or let someone know how you are feeling",
            "Remove access to anything you could use to harm yourself",
            "Keep this plan open until you are connected with support",
        ]),
        // The support line is embedded here; the generator must not append a
        // second copy for the crisis branch.
        recommended_links: vec![
            crisis_support_link(),
            ResourceLink::new(
                "Talk Suicide Canada",
                "https://talksuicide.ca/",
                "National suicide prevention service, call or text support",
            ),
        ],
        next_steps: strings(&[
            "Call 1-833-456-4566 now",
            "Tell one person you trust how you are feeling today",
            "Arrange a follow-up with a healthcare provider this week",
        ]),
    }
}

fn anxiety_plan() -> ResourcePlan {
    ResourcePlan {
        summary: "Our conversation suggests anxiety has been affecting your day-to-day life. \
            The recommendations below focus on understanding anxious patterns and practical \
            ways to take the pressure off."
            .to_string(),
        key_advice: strings(&[
            "Practice slow breathing when you notice racing thoughts or physical tension",
            "Keep a regular sleep schedule; poor sleep and anxiety feed each other",
            "Limit caffeine and alcohol, which can amplify anxious symptoms",
            "Consider talking to a professional about cognitive behavioural therapy",
        ]),
        recommended_links: vec![
            ResourceLink::new(
                "MindFit Toolkit",
                "https://menshealthfoundation.ca/mindfit-toolkit/",
                "Free mental fitness tools built for men, including anxiety modules",
            ),
            ResourceLink::new(
                "Anxiety Canada",
                "https://www.anxietycanada.com/",
                "Evidence-based self-help resources and anxiety management programs",
            ),
        ],
        next_steps: strings(&[
            "Try the anxiety self-check in the MindFit Toolkit",
            "Pick one calming practice and use it daily for a week",
            "Book a conversation with a counsellor if symptoms persist",
        ]),
    }
}

fn depression_plan() -> ResourcePlan {
    ResourcePlan {
        summary: "Our conversation suggests a persistent low mood may be weighing on you. \
            The recommendations below focus on small, sustainable steps and connecting with \
            people who can help."
            .to_string(),
        key_advice: strings(&[
            "Aim for one small achievable task each day and give yourself credit for it",
            "Get outside for daylight and movement, even briefly",
            "Stay in contact with at least one supportive person each week",
            "Talk to a doctor or counsellor; depression is very treatable",
        ]),
        recommended_links: vec![
            ResourceLink::new(
                "Men's Mental Health Resources",
                "https://menshealthfoundation.ca/mental-health/",
                "Evidence-based mental health information and support services",
            ),
            ResourceLink::new(
                "HeadsUpGuys",
                "https://headsupguys.org/",
                "Practical tips and self-checks for men fighting depression",
            ),
        ],
        next_steps: strings(&[
            "Complete the depression self-check on HeadsUpGuys",
            "Schedule an appointment with your doctor to talk about your mood",
            "Plan one social contact for this week, however small",
        ]),
    }
}

fn combined_plan() -> ResourcePlan {
    ResourcePlan {
        summary: "Our conversation suggests you are dealing with both anxious feelings and a \
            low mood. These often appear together, and the same supports help with both. The \
            plan below combines steadying routines with professional follow-up."
            .to_string(),
        key_advice: strings(&[
            "Anchor your day with a consistent wake time, meals, and wind-down routine",
            "Use brief breathing or grounding exercises when anxiety spikes",
            "Keep one manageable goal per day while your energy is low",
            "Seek a professional assessment; combined symptoms respond well to treatment",
        ]),
        recommended_links: vec![
            ResourceLink::new(
                "MindFit Toolkit",
                "https://menshealthfoundation.ca/mindfit-toolkit/",
                "Free mental fitness tools built for men",
            ),
            ResourceLink::new(
                "Wellness Together Canada",
                "https://www.wellnesstogether.ca/",
                "Free counselling and self-guided mental health programs",
            ),
        ],
        next_steps: strings(&[
            "Complete both the anxiety and depression self-checks",
            "Book a professional assessment to look at the full picture",
            "Choose one routine-building step to start this week",
        ]),
    }
}

fn wellness_plan() -> ResourcePlan {
    ResourcePlan {
        summary: "Based on our conversation, the following recommendations may help support \
            your mental health and wellbeing. These are suggestions to consider as part of \
            your personal care plan."
            .to_string(),
        key_advice: strings(&[
            "Consider establishing regular check-ins with yourself about your mental state",
            "Explore stress management techniques that work for your lifestyle",
            "Maintain connections with supportive people in your life",
            "Consider professional support if symptoms persist or worsen",
        ]),
        recommended_links: vec![ResourceLink::new(
            "Men's Mental Health Resources",
            "https://menshealthfoundation.ca/mental-health/",
            "Evidence-based mental health information and support services",
        )],
        next_steps: strings(&[
            "Review these recommendations carefully",
            "Discuss any concerns with a healthcare provider if needed",
            "Consider implementing one or two suggestions to start",
            "Monitor your wellbeing and adjust as necessary",
        ]),
    }
}

/// Build the resource plan for a classified message.
///
/// Crisis wins unconditionally. Every non-crisis branch gets the 24/7 crisis
/// support link appended last; the crisis template already embeds it.
pub fn build_plan(classification: Classification) -> ResourcePlan {
    if classification.is_crisis {
        return crisis_plan();
    }

    let mut plan = match (classification.has_anxiety, classification.has_depression) {
        (true, true) => combined_plan(),
        (true, false) => anxiety_plan(),
        (false, true) => depression_plan(),
        (false, false) => wellness_plan(),
    };

    plan.recommended_links.push(crisis_support_link());
    plan
}
