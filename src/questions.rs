//! Quiz questions and the curated question bank.

use crate::constants::ANSWERS_PER_QUESTION;
use serde::Deserialize;

/// A multiple-choice question: exactly 4 answers, one correct.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub id: usize,
    #[serde(rename = "question")]
    pub prompt: String,
    pub answers: Vec<String>,
    pub correct: usize,
    pub explanation: String,
}

impl Question {
    /// Structural validity: 4 non-empty answers, correct index in range,
    /// non-empty prompt and explanation.
    pub fn is_valid(&self) -> bool {
        self.answers.len() == ANSWERS_PER_QUESTION
            && self.answers.iter().all(|a| !a.trim().is_empty())
            && self.correct < ANSWERS_PER_QUESTION
            && !self.prompt.trim().is_empty()
            && !self.explanation.trim().is_empty()
    }
}

/// A finite ordered sequence of questions.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

fn question(
    id: usize,
    prompt: &str,
    answers: [&str; ANSWERS_PER_QUESTION],
    correct: usize,
    explanation: &str,
) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        answers: answers.iter().map(|a| a.to_string()).collect(),
        correct,
        explanation: explanation.to_string(),
    }
}

/// The curated fallback question set shipped with the game.
pub fn curated_bank() -> QuestionBank {
    QuestionBank::new(vec![
        question(
            0,
            "What is the best way to prevent pregnancy?",
            [
                "Abstinence or contraception",
                "Crossing fingers",
                "Drinking coffee",
                "Eating vegetables",
            ],
            0,
            "Abstinence (not having sex) is 100% effective. If sexually active, \
             contraception like condoms or birth control pills are highly effective \
             when used correctly.",
        ),
        question(
            1,
            "What does STI stand for?",
            [
                "Sexually Transmitted Infection",
                "Super Tight Infection",
                "Simple Test Info",
                "Safe Time Indicator",
            ],
            0,
            "STI stands for Sexually Transmitted Infection - infections passed through \
             sexual contact that can be prevented with protection and regular testing.",
        ),
        question(
            2,
            "What is consent in a relationship?",
            [
                "Clear, voluntary agreement by all parties",
                "Silence means yes",
                "Maybe means yes",
                "Only needed once",
            ],
            0,
            "Consent is a clear, enthusiastic 'yes' that can be withdrawn at any time. \
             It must be given freely without pressure, and silence or maybe never means yes.",
        ),
        question(
            3,
            "At what age is it appropriate to learn about puberty?",
            [
                "Before it starts (8-10 years)",
                "After 18",
                "Never",
                "Only in college",
            ],
            0,
            "Learning about puberty before it happens (typically ages 8-10) helps young \
             people understand and cope with the physical and emotional changes in their \
             bodies.",
        ),
        question(
            4,
            "What is the most effective way to prevent STIs?",
            [
                "Using condoms correctly and consistently",
                "Wishful thinking",
                "Taking vitamins",
                "Drinking lots of water",
            ],
            0,
            "Condoms, when used correctly every time, significantly reduce the risk of \
             most STIs. Abstinence is the only 100% effective method.",
        ),
        question(
            5,
            "Should both partners discuss contraception?",
            [
                "Yes, it's a shared responsibility",
                "No, only one person's choice",
                "Only if married",
                "Only after pregnancy",
            ],
            0,
            "Both partners should discuss and agree on contraception methods as it \
             affects both people equally and promotes healthy communication.",
        ),
        question(
            6,
            "What should you do if someone pressures you into sexual activity?",
            [
                "Say no firmly and remove yourself from the situation",
                "Give in to avoid conflict",
                "Stay silent",
                "Feel guilty about saying no",
            ],
            0,
            "You always have the right to say no. Leave the situation immediately and \
             talk to a trusted adult. Never feel guilty for protecting yourself.",
        ),
        question(
            7,
            "What is a healthy relationship based on?",
            [
                "Respect, trust, and open communication",
                "Control and jealousy",
                "Always agreeing with each other",
                "Keeping secrets from each other",
            ],
            0,
            "Healthy relationships require mutual respect, trust, honest communication, \
             and supporting each other's independence and personal growth.",
        ),
        question(
            8,
            "What is a sign of good mental wellbeing?",
            [
                "Being able to cope with normal life stress",
                "Never feeling sad or stressed",
                "Avoiding all difficult situations",
                "Not needing friends or family",
            ],
            0,
            "Good mental health means you can handle life's challenges effectively, not \
             that you never face difficulties. Everyone experiences stress and sadness \
             sometimes.",
        ),
        question(
            9,
            "Who should you talk to if you're struggling with mental health?",
            [
                "Trusted adult, counselor, or mental health professional",
                "Nobody - handle it alone",
                "Only strangers online",
                "Keep it secret always",
            ],
            0,
            "Talking to trusted people and professionals is important. Mental health \
             struggles are common and treatable - you don't have to face them alone.",
        ),
        question(
            10,
            "What is peer pressure?",
            [
                "When friends influence you to do something you're unsure about",
                "When teachers give homework",
                "When parents set rules",
                "A type of exercise",
            ],
            0,
            "Peer pressure is when friends or classmates try to influence your decisions. \
             It's okay to say no to things you're uncomfortable with, even if others are \
             doing it.",
        ),
        question(
            11,
            "What is body autonomy?",
            [
                "Your right to make decisions about your own body",
                "Following what others say about your body",
                "Letting others touch you without permission",
                "Not caring about your health",
            ],
            0,
            "Body autonomy means you have the right to decide what happens to your body. \
             No one should touch you without your permission, and you can always say no.",
        ),
    ])
}
