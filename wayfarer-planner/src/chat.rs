//! Simulated travel assistant conversation
use serde::{Deserialize, Serialize};

use crate::config::ChatConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatAuthor {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub author: ChatAuthor,
    pub text: String,
}

impl ChatMessage {
    #[must_use]
    pub const fn is_user(&self) -> bool {
        matches!(self.author, ChatAuthor::User)
    }
}

/// Handle for a reply scheduled by [`ChatSession::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplyTicket {
    generation: u64,
}

/// Message log plus the pending-reply generation counter.
///
/// A ticket is live while its generation matches the session's; cancelling
/// bumps the generation so late timers become no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    canned_reply: String,
    reply_delay_ms: u32,
    generation: u64,
    pending: usize,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(&ChatConfig::default())
    }
}

impl ChatSession {
    #[must_use]
    pub fn new(cfg: &ChatConfig) -> Self {
        Self {
            messages: Vec::new(),
            canned_reply: cfg.canned_reply.clone(),
            reply_delay_ms: cfg.reply_delay_ms,
            generation: 0,
            pending: 0,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub const fn reply_delay_ms(&self) -> u32 {
        self.reply_delay_ms
    }

    /// Replies scheduled and not yet delivered or cancelled.
    #[must_use]
    pub const fn pending(&self) -> usize {
        self.pending
    }

    /// Append a user message and schedule a reply.
    ///
    /// Input is trimmed; whitespace-only input is ignored and returns `None`.
    pub fn submit(&mut self, text: &str) -> Option<ReplyTicket> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            author: ChatAuthor::User,
            text: text.to_string(),
        });
        self.pending += 1;
        Some(ReplyTicket {
            generation: self.generation,
        })
    }

    /// Append the canned reply if `ticket` is still live.
    pub fn deliver(&mut self, ticket: ReplyTicket) -> bool {
        if ticket.generation != self.generation || self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        self.messages.push(ChatMessage {
            author: ChatAuthor::Assistant,
            text: self.canned_reply.clone(),
        });
        true
    }

    /// Invalidate every outstanding ticket.
    pub fn cancel_pending(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = 0;
    }
}
