//! # Mentor Conversations
//!
//! In-memory chat threads between the student and their mentors. Sending a
//! message only appends locally; there is no delivery and no reply.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::core::catalog::CatalogError;

const BUILTIN_CONVERSATIONS: &str = include_str!("../../assets/conversations.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Student,
    Mentor,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Mentor {
    pub name: String,
    pub specialty: String,
    pub online: bool,
}

impl Mentor {
    /// "Carlos Mendes" -> "CM"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub time: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Conversation {
    pub id: u32,
    pub mentor: Mentor,
    #[serde(default)]
    pub unread: u32,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Inbox {
    conversations: Vec<Conversation>,
}

impl Inbox {
    pub fn new(conversations: Vec<Conversation>) -> Self {
        Self { conversations }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let conversations = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        Ok(Self::new(conversations))
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CONVERSATIONS)
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn find(&self, id: u32) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn total_unread(&self) -> u32 {
        self.conversations.iter().map(|c| c.unread).sum()
    }

    /// Conversations whose mentor name or specialty contains `query`.
    pub fn filter(&self, query: &str) -> Vec<&Conversation> {
        let needle = query.trim().to_lowercase();
        self.conversations
            .iter()
            .filter(|c| {
                needle.is_empty()
                    || c.mentor.name.to_lowercase().contains(&needle)
                    || c.mentor.specialty.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Marks a conversation read. Returns false if it doesn't exist.
    pub fn open(&mut self, id: u32) -> bool {
        match self.conversations.iter_mut().find(|c| c.id == id) {
            Some(conversation) => {
                conversation.unread = 0;
                true
            }
            None => false,
        }
    }

    /// Appends a student message. Blank text and unknown ids are ignored.
    pub fn send(&mut self, id: u32, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        conversation.messages.push(ChatMessage {
            sender: Sender::Student,
            text: text.to_string(),
            time: Local::now().format("%H:%M").to_string(),
        });
        true
    }
}
