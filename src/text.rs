//! Message records attached to nodes and their labels.
//!
//! Messages are inert payload as far as node handling is concerned: they are
//! carried, cleared on reset, and (de)serialized, but never interpreted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Info,
    Error,
    Success,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageType::Info => write!(f, "info"),
            MessageType::Error => write!(f, "error"),
            MessageType::Success => write!(f, "success"),
        }
    }
}

/// A single localizable message, e.g. a field label or a validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub text: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    /// Template parameters used to render `text` in other locales.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub context: serde_json::Value,
}

impl Message {
    pub fn new(id: u32, text: impl Into<String>, message_type: MessageType) -> Self {
        Self {
            id,
            text: text.into(),
            message_type,
            context: serde_json::Value::Null,
        }
    }

    pub fn info(id: u32, text: impl Into<String>) -> Self {
        Self::new(id, text, MessageType::Info)
    }

    pub fn error(id: u32, text: impl Into<String>) -> Self {
        Self::new(id, text, MessageType::Error)
    }

    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = context;
        self
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An ordered list of messages.
pub type Messages = Vec<Message>;
