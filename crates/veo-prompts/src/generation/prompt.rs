//! Prompt templates for video-prompt generation

use serde::{Deserialize, Serialize};

/// Fixed system instruction sent with every paragraph
pub const SYSTEM_INSTRUCTION: &str = r#"You are a film director, anthropologist, and visual historian creating cinematic video prompts for Google Veo 3 (fast mode).
Your task is to generate 1 prompt in English from the provided paragraph of a prehistoric narrative script.

Guidelines:
- Create vivid, cinematic descriptions suitable for video generation
- Focus on visual elements, atmosphere, and camera work
- Keep prompts concise but descriptive (2-4 sentences)
- Include details about lighting, composition, and mood
- Respond ONLY with the video prompt text, no additional commentary"#;

/// One chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Prompt builder for paragraph requests
pub struct PromptBuilder;

impl PromptBuilder {
    /// System instruction followed by the paragraph as the user turn
    pub fn build_messages(paragraph: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(SYSTEM_INSTRUCTION),
            ChatMessage::user(paragraph),
        ]
    }
}
