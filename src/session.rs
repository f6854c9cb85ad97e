//! Per-user conversation state.
//!
//! The pipeline itself is stateless; the shell owns a [`Session`] and hands
//! its [`ChatLog`] to the pipeline on every turn.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::translation::{Language, PIVOT_LANGUAGE};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "You"),
            Sender::Bot => write!(f, "Bot"),
        }
    }
}

/// One message in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub sender: Sender,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn new(sender: Sender, message: impl Into<String>) -> Self {
        Self {
            sender,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for ConversationTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.sender, self.message)
    }
}

/// Append-only record of a conversation, in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatLog {
    turns: Vec<ConversationTurn>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, message: impl Into<String>) {
        self.turns.push(ConversationTurn::new(Sender::User, message));
    }

    pub fn push_bot(&mut self, message: impl Into<String>) {
        self.turns.push(ConversationTurn::new(Sender::Bot, message));
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Last bot reply, if any.
    pub fn last_reply(&self) -> Option<&str> {
        self.turns
            .iter()
            .rev()
            .find(|turn| turn.sender == Sender::Bot)
            .map(|turn| turn.message.as_str())
    }

    /// Drop every turn. Used when the user starts over.
    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

/// A chat session: identity, selected language, history and pending input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub language: Language,
    pub chat_log: ChatLog,
    /// Text the user has typed but not yet sent.
    pub pending_input: Option<String>,
    pub started_at: DateTime<Utc>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PIVOT_LANGUAGE)
    }
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            language,
            chat_log: ChatLog::new(),
            pending_input: None,
            started_at: Utc::now(),
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Take the pending input, leaving the slot empty. Blank input counts
    /// as nothing to send.
    pub fn take_pending(&mut self) -> Option<String> {
        self.pending_input
            .take()
            .filter(|text| !text.trim().is_empty())
    }
}
