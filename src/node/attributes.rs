//! The closed set of attribute payloads a node can carry.
//!
//! Every payload variant is listed once in [`Attributes`]; both directions of the
//! node codec go through [`Attributes::node_type`] and [`Attributes::decode`], so
//! adding a variant without handling it on both sides does not compile.

use super::NodeType;
use crate::text::Message;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The type of an HTML input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InputAttributeType {
    #[default]
    Text,
    Password,
    Number,
    Checkbox,
    Hidden,
    Email,
    Tel,
    Submit,
    Button,
    DatetimeLocal,
    Date,
    Url,
}

/// Autocomplete hints for input elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Autocomplete {
    Email,
    Tel,
    Url,
    CurrentPassword,
    NewPassword,
    OneTimeCode,
    Username,
    #[serde(rename = "webauthn")]
    WebAuthn,
    #[serde(rename = "username webauthn")]
    UsernameWebAuthn,
}

/// Attributes of an `<input>` element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputAttributes {
    pub name: String,
    #[serde(rename = "type", default)]
    pub input_type: InputAttributeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<Autocomplete>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onclick: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxlength: Option<u32>,
}

impl InputAttributes {
    pub fn new(name: impl Into<String>, input_type: InputAttributeType) -> Self {
        Self {
            name: name.into(),
            input_type,
            ..Default::default()
        }
    }

    /// Stores a value. `null` clears it.
    pub fn set_value(&mut self, value: Value) {
        self.value = match value {
            Value::Null => None,
            other => Some(other),
        };
    }
}

/// Attributes of a plain text element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAttributes {
    pub id: String,
    pub text: Message,
}

/// Attributes of an `<img>` element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageAttributes {
    pub id: String,
    pub src: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

/// Attributes of an `<a>` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorAttributes {
    pub id: String,
    pub href: String,
    pub title: Message,
}

/// Attributes of a `<script>` element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScriptAttributes {
    pub id: String,
    pub src: String,
    #[serde(rename = "async", default)]
    pub is_async: bool,
    #[serde(default)]
    pub referrerpolicy: String,
    #[serde(default)]
    pub crossorigin: String,
    #[serde(default)]
    pub integrity: String,
    #[serde(rename = "type", default)]
    pub script_type: String,
    #[serde(default)]
    pub nonce: String,
}

/// Attributes of a `<div>` container. `data` keys encode in sorted order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DivisionAttributes {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, String>>,
}

/// A node's attribute payload. Serializing stamps the variant's discriminator
/// into the payload as `node_type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node_type")]
pub enum Attributes {
    #[serde(rename = "text")]
    Text(TextAttributes),
    #[serde(rename = "input")]
    Input(InputAttributes),
    #[serde(rename = "img")]
    Image(ImageAttributes),
    #[serde(rename = "a")]
    Anchor(AnchorAttributes),
    #[serde(rename = "script")]
    Script(ScriptAttributes),
    #[serde(rename = "div")]
    Division(DivisionAttributes),
}

impl Attributes {
    /// The discriminator implied by the payload variant.
    pub fn node_type(&self) -> NodeType {
        match self {
            Attributes::Text(_) => NodeType::Text,
            Attributes::Input(_) => NodeType::Input,
            Attributes::Image(_) => NodeType::Image,
            Attributes::Anchor(_) => NodeType::Anchor,
            Attributes::Script(_) => NodeType::Script,
            Attributes::Division(_) => NodeType::Division,
        }
    }

    /// Decodes a raw payload into the variant selected by `node_type`.
    pub(crate) fn decode(node_type: NodeType, payload: Value) -> Result<Self, serde_json::Error> {
        Ok(match node_type {
            NodeType::Text => Attributes::Text(serde_json::from_value(payload)?),
            NodeType::Input => Attributes::Input(serde_json::from_value(payload)?),
            NodeType::Image => Attributes::Image(serde_json::from_value(payload)?),
            NodeType::Anchor => Attributes::Anchor(serde_json::from_value(payload)?),
            NodeType::Script => Attributes::Script(serde_json::from_value(payload)?),
            NodeType::Division => Attributes::Division(serde_json::from_value(payload)?),
        })
    }

    pub fn id(&self) -> &str {
        match self {
            Attributes::Text(a) => &a.id,
            Attributes::Input(a) => &a.name,
            Attributes::Image(a) => &a.id,
            Attributes::Anchor(a) => &a.id,
            Attributes::Script(a) => &a.id,
            Attributes::Division(a) => &a.id,
        }
    }

    pub fn value(&self) -> Value {
        match self {
            Attributes::Input(a) => a.value.clone().unwrap_or(Value::Null),
            Attributes::Text(a) => Value::String(a.text.text.clone()),
            Attributes::Image(a) => Value::String(a.src.clone()),
            Attributes::Anchor(a) => Value::String(a.href.clone()),
            Attributes::Script(a) => Value::String(a.src.clone()),
            Attributes::Division(_) => Value::Null,
        }
    }

    /// Replaces the payload's value. Text and division payloads hold no value
    /// and ignore this.
    pub fn set_value(&mut self, value: Value) {
        match self {
            Attributes::Input(a) => a.set_value(value),
            Attributes::Image(a) => a.src = value_to_string(&value),
            Attributes::Anchor(a) => a.href = value_to_string(&value),
            Attributes::Script(a) => a.src = value_to_string(&value),
            Attributes::Text(_) | Attributes::Division(_) => {}
        }
    }

    /// Clears submitted state. Only inputs carry any.
    pub fn reset(&mut self) {
        if let Attributes::Input(a) = self {
            a.value = None;
        }
    }

    /// Partial match of payloads. Payloads of different variants match only when
    /// `typed` is false, i.e. the caller is not filtering by node type.
    pub fn matches(&self, needle: &Attributes, typed: bool) -> bool {
        if self.node_type() != needle.node_type() {
            return !typed;
        }

        if !needle.id().is_empty() && self.id() != needle.id() {
            return false;
        }

        match (self, needle) {
            (Attributes::Input(a), Attributes::Input(b)) => match &b.value {
                Some(v) => a.value.as_ref().map(value_to_string) == Some(value_to_string(v)),
                None => true,
            },
            _ => true,
        }
    }
}

/// Renders a value as plain text: strings unquoted, `null` empty, everything
/// else as JSON.
pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
