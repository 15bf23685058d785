//! Remote question generation with curated fallback.
//!
//! Posts a prompt to a text-generation API and turns the reply into a
//! question bank. Any failure along the way (network, malformed payload,
//! too few valid questions) falls back to the curated set without
//! surfacing an error to the player.

use crate::constants::GENERATED_QUESTION_COUNT;
use crate::questions::{curated_bank, Question, QuestionBank};
use serde::Deserialize;
use std::error::Error;

const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";
const DEFAULT_TOPIC: &str = "sex education and mental health for teenagers";

/// Environment variable holding the generation API key.
/// Generation is disabled when it is unset or empty.
pub const API_KEY_ENV: &str = "QUIZMAZE_API_KEY";

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub endpoint: String,
    pub api_key: String,
    pub topic: String,
    pub count: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: std::env::var(API_KEY_ENV).unwrap_or_default(),
            topic: DEFAULT_TOPIC.to_string(),
            count: GENERATED_QUESTION_COUNT,
        }
    }
}

// Response envelope of the generation API
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Deserialize)]
struct ContentPart {
    text: String,
}

/// Strip markdown code fences the model tends to wrap JSON in.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}

/// The first top-level JSON array in the text, fences already stripped.
fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parse model output into validated questions with reassigned ids.
pub fn parse_questions(text: &str) -> Result<Vec<Question>, Box<dyn Error>> {
    let cleaned = strip_code_fences(text);
    let array = extract_json_array(&cleaned).ok_or("no JSON array in response")?;
    let candidates: Vec<Question> = serde_json::from_str(array)?;

    let mut valid: Vec<Question> = candidates.into_iter().filter(Question::is_valid).collect();
    for (i, q) in valid.iter_mut().enumerate() {
        q.id = i;
    }
    Ok(valid)
}

fn build_prompt(config: &GenerationConfig) -> String {
    format!(
        "Generate exactly {count} age-appropriate, educational multiple-choice quiz \
         questions about {topic} for teenagers. Each question MUST be a JSON object \
         with fields \"question\", \"answers\" (array of 4 strings), \"correct\" \
         (index 0-3) and \"explanation\". Return ONLY a JSON array with no \
         additional text or formatting.",
        count = config.count,
        topic = config.topic,
    )
}

/// Fetch generated questions from the remote API.
fn fetch_generated(config: &GenerationConfig) -> Result<Vec<Question>, Box<dyn Error>> {
    let url = format!("{}?key={}", config.endpoint, config.api_key);

    let response: GenerateResponse = ureq::post(&url)
        .set("User-Agent", "quizmaze")
        .send_json(serde_json::json!({
            "contents": [{
                "parts": [{ "text": build_prompt(config) }]
            }],
            "generationConfig": {
                "temperature": 0.7,
                "maxOutputTokens": 2048,
            }
        }))?
        .into_json()?;

    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.as_str())
        .ok_or("empty response from generation API")?;

    parse_questions(text)
}

/// Load the question bank: remote generation when configured, curated set
/// otherwise or on any failure. Never errors.
pub fn load_question_bank(config: &GenerationConfig) -> QuestionBank {
    if config.api_key.is_empty() {
        return curated_bank();
    }

    match fetch_generated(config) {
        // Too few survivors means the model reply was mostly junk
        Ok(questions) if questions.len() * 2 >= config.count => {
            let mut questions = questions;
            questions.truncate(config.count);
            QuestionBank::new(questions)
        }
        Ok(questions) => {
            eprintln!(
                "question generation returned only {} valid questions, using curated set",
                questions.len()
            );
            curated_bank()
        }
        Err(e) => {
            eprintln!("question generation failed ({}), using curated set", e);
            curated_bank()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "question": "What is consent?",
            "answers": ["A clear voluntary yes", "Silence", "Maybe", "Pressure"],
            "correct": 0,
            "explanation": "Consent is a freely given agreement."
        },
        {
            "question": "Broken entry",
            "answers": ["Only", "Three", "Answers"],
            "correct": 0,
            "explanation": "Should be filtered out."
        }
    ]"#;

    #[test]
    fn test_parse_filters_invalid_questions() {
        let questions = parse_questions(SAMPLE).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, 0);
        assert_eq!(questions[0].prompt, "What is consent?");
    }

    #[test]
    fn test_parse_strips_code_fences() {
        let fenced = format!("```json\n{}\n```", SAMPLE);
        let questions = parse_questions(&fenced).unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_questions("no json here").is_err());
        assert!(parse_questions("[{\"broken\": }]").is_err());
    }

    #[test]
    fn test_disabled_generation_uses_curated_set() {
        let config = GenerationConfig {
            api_key: String::new(),
            ..GenerationConfig::default()
        };
        let bank = load_question_bank(&config);
        assert_eq!(bank.len(), 12);
    }

    #[test]
    fn test_extract_json_array() {
        assert_eq!(extract_json_array("noise [1, 2] tail"), Some("[1, 2]"));
        assert_eq!(extract_json_array("no array"), None);
        assert_eq!(extract_json_array("] backwards ["), None);
    }
}
