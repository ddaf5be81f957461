//! Chatbot rule engine.
//!
//! Keyword-to-response lookup over a fixed rule table, plus the transcript
//! that a chat surface renders. The first rule whose keyword appears in the
//! lowercased input wins; anything unmatched gets the fallback reply.

use chrono::{DateTime, Utc};
use serde::Serialize;

use hale_types::{NonEmptyText, TextError};

pub const GREETING: &str = "Hello! I'm your health assistant. How can I help you today?";

pub const FALLBACK_REPLY: &str =
    "I'm sorry, I don't understand that query. Could you try rephrasing?";

/// Canned prompts offered above the input box; selecting one pre-fills the
/// input rather than sending it.
pub const QUICK_QUESTIONS: [&str; 5] = [
    "What should I eat today?",
    "How can I improve my sleep?",
    "What exercises are recommended?",
    "How can I reduce stress?",
    "What's my health status?",
];

struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

const RULES: [Rule; 5] = [
    Rule {
        keywords: &["diet", "eat", "food"],
        reply: "Based on your health profile, I recommend eating more leafy greens, lean \
                proteins, and whole grains. Try to limit processed foods and added sugars.",
    },
    Rule {
        keywords: &["sleep", "tired"],
        reply: "For better sleep quality, aim for 7-8 hours per night. Establish a regular \
                sleep schedule and avoid screens before bedtime.",
    },
    Rule {
        keywords: &["exercise", "workout"],
        reply: "I recommend 150 minutes of moderate exercise per week. Mix cardio activities \
                with strength training for optimal results.",
    },
    Rule {
        keywords: &["stress", "anxiety"],
        reply: "Regular meditation, deep breathing exercises, and physical activity can help \
                manage stress levels. Consider taking short breaks throughout your day.",
    },
    Rule {
        keywords: &["hello", "hi"],
        reply: "Hello! How can I assist with your health today?",
    },
];

/// Stateless keyword matcher.
pub struct ChatEngine;

impl ChatEngine {
    /// Matches the input against the rule table, first hit wins.
    pub fn reply(input: &str) -> &'static str {
        let lowered = input.to_lowercase();
        RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw)))
            .map(|rule| rule.reply)
            .unwrap_or(FALLBACK_REPLY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: ChatSender,
    pub timestamp: DateTime<Utc>,
}

/// Ordered conversation history, seeded with the bot greeting.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        transcript.push(ChatSender::Bot, GREETING.to_owned());
        transcript
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Records a user message and the matching bot reply.
    ///
    /// Blank input is rejected and the transcript stays unchanged, matching
    /// the disabled send button on whitespace-only input.
    pub fn post(&mut self, input: &str) -> Result<&'static str, TextError> {
        let text = NonEmptyText::new(input)?;
        let reply = ChatEngine::reply(text.as_str());
        self.push(ChatSender::User, text.into_inner());
        self.push(ChatSender::Bot, reply.to_owned());
        Ok(reply)
    }

    fn push(&mut self, sender: ChatSender, text: String) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            sender,
            timestamp: Utc::now(),
        });
        self.next_id += 1;
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_map_to_canned_replies() {
        assert!(ChatEngine::reply("What should I EAT today?").contains("leafy greens"));
        assert!(ChatEngine::reply("I feel tired all the time").contains("7-8 hours"));
        assert!(ChatEngine::reply("any workout tips?").contains("150 minutes"));
        assert!(ChatEngine::reply("dealing with anxiety").contains("meditation"));
        assert_eq!(
            ChatEngine::reply("hi there"),
            "Hello! How can I assist with your health today?"
        );
    }

    #[test]
    fn unmatched_input_gets_the_fallback() {
        assert_eq!(ChatEngine::reply("quantum entanglement"), FALLBACK_REPLY);
    }

    #[test]
    fn earlier_rules_win_on_overlap() {
        // "diet" outranks "stress" because the rule table is ordered.
        assert!(ChatEngine::reply("stress eating at night").contains("leafy greens"));
    }

    #[test]
    fn transcript_starts_with_the_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].text, GREETING);
        assert_eq!(transcript.messages()[0].sender, ChatSender::Bot);
        assert_eq!(transcript.messages()[0].id, 1);
    }

    #[test]
    fn post_appends_user_message_and_reply_with_increasing_ids() {
        let mut transcript = Transcript::new();
        let reply = transcript.post("how do I sleep better?").expect("reply");
        assert!(reply.contains("7-8 hours"));

        let messages = transcript.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender, ChatSender::User);
        assert_eq!(messages[2].sender, ChatSender::Bot);
        assert_eq!(messages[2].text, reply);
        assert!(messages.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn blank_input_leaves_the_transcript_unchanged() {
        let mut transcript = Transcript::new();
        assert!(transcript.post("   \n").is_err());
        assert_eq!(transcript.messages().len(), 1);
    }
}
