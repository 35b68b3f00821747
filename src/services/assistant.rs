//! Canned study assistant: a random opener plus a fixed key-points body.

use async_trait::async_trait;
use rand::seq::IndexedRandom;

use super::{ServiceError, StudyAssistant};
use crate::models::Message;

pub const GREETING: &str = "Hello! I'm your AI study assistant. I can help you with questions about any subject, \
explain complex concepts, provide examples, and guide you through problem-solving. \
What would you like to learn about today?";

pub const OPENERS: [&str; 5] = [
    "Great question! Let me break that down for you step by step...",
    "That's an interesting topic. Here's what you need to know:",
    "I'd be happy to help explain that concept. Let's start with the basics:",
    "That's a fundamental concept in this subject. Here's a comprehensive explanation:",
    "Excellent question! This is actually a key principle that many students find challenging at first.",
];

/// One-click prompts offered above the chat input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickQuestion {
    pub text: &'static str,
    pub category: &'static str,
}

pub const QUICK_QUESTIONS: [QuickQuestion; 3] = [
    QuickQuestion { text: "Explain calculus derivatives", category: "Math" },
    QuickQuestion { text: "Summarize photosynthesis", category: "Biology" },
    QuickQuestion { text: "How does AI work?", category: "Technology" },
];

pub struct CannedAssistant;

#[async_trait]
impl StudyAssistant for CannedAssistant {
    async fn reply(&self, _history: &[Message], question: &str) -> Result<String, ServiceError> {
        let opener = OPENERS.choose(&mut rand::rng()).copied().unwrap_or(OPENERS[0]);
        Ok(compose_reply(opener, question))
    }
}

#[must_use]
pub fn compose_reply(opener: &str, question: &str) -> String {
    format!(
        "{opener}\n\nRegarding \"{question}\", here are the key points:\n\n\
         • This concept is fundamental to understanding the broader topic\n\
         • It connects to several other important principles\n\
         • Practice problems and examples help reinforce the learning\n\
         • Feel free to ask follow-up questions for clarification\n\n\
         Would you like me to provide some practice problems or explain any specific aspect in more detail?"
    )
}
