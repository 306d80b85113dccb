use crate::text::{Message, Messages};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub mod attributes;
mod codec;

pub use attributes::*;

/// The kind of UI element a node renders as. The wire form doubles as the
/// discriminator for the node's attribute payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "input")]
    Input,
    #[serde(rename = "img")]
    Image,
    #[serde(rename = "a")]
    Anchor,
    #[serde(rename = "script")]
    Script,
    #[serde(rename = "div")]
    Division,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Text => "text",
            NodeType::Input => "input",
            NodeType::Image => "img",
            NodeType::Anchor => "a",
            NodeType::Script => "script",
            NodeType::Division => "div",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(NodeType::Text),
            "input" => Ok(NodeType::Input),
            "img" => Ok(NodeType::Image),
            "a" => Ok(NodeType::Anchor),
            "script" => Ok(NodeType::Script),
            "div" => Ok(NodeType::Division),
            other => Err(other.to_string()),
        }
    }
}

/// The authentication method or flow concern a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeGroup {
    Default,
    Password,
    #[serde(rename = "oidc")]
    OpenIdConnect,
    Profile,
    Link,
    Code,
    Totp,
    LookupSecret,
    #[serde(rename = "webauthn")]
    WebAuthn,
    Passkey,
    IdentifierFirst,
    Captcha,
    Saml,
}

impl NodeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeGroup::Default => "default",
            NodeGroup::Password => "password",
            NodeGroup::OpenIdConnect => "oidc",
            NodeGroup::Profile => "profile",
            NodeGroup::Link => "link",
            NodeGroup::Code => "code",
            NodeGroup::Totp => "totp",
            NodeGroup::LookupSecret => "lookup_secret",
            NodeGroup::WebAuthn => "webauthn",
            NodeGroup::Passkey => "passkey",
            NodeGroup::IdentifierFirst => "identifier_first",
            NodeGroup::Captcha => "captcha",
            NodeGroup::Saml => "saml",
        }
    }
}

impl fmt::Display for NodeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(Value::String(s.to_string())).map_err(|_| s.to_string())
    }
}

/// Descriptive information that UIs may use when rendering a node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Meta {
    /// The node's label. Generated by the flow; UIs wanting other wording
    /// should provide it themselves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Message>,
}

/// A single UI element of an identity flow.
///
/// A node is identified by its attribute payload (see [`Node::id`]), not by its
/// type or group. `node_type` may be left unset while building a node; encoding
/// derives it from the attribute variant and rejects a conflicting value.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub node_type: Option<NodeType>,
    pub group: Option<NodeGroup>,
    pub attributes: Attributes,
    pub messages: Messages,
    pub meta: Meta,
}

impl Node {
    /// Creates an ungrouped node around an attribute payload.
    pub fn new(attributes: Attributes) -> Self {
        Self {
            node_type: None,
            group: None,
            attributes,
            messages: Messages::new(),
            meta: Meta::default(),
        }
    }

    pub fn new_input_field(
        name: impl Into<String>,
        value: impl Into<Value>,
        group: NodeGroup,
        input_type: InputAttributeType,
    ) -> Self {
        let mut attributes = InputAttributes::new(name, input_type);
        attributes.set_value(value.into());
        Self::new(Attributes::Input(attributes)).with_group(group)
    }

    pub fn new_text(id: impl Into<String>, text: Message, group: NodeGroup) -> Self {
        Self::new(Attributes::Text(TextAttributes {
            id: id.into(),
            text,
        }))
        .with_group(group)
    }

    pub fn new_image(id: impl Into<String>, src: impl Into<String>, group: NodeGroup) -> Self {
        Self::new(Attributes::Image(ImageAttributes {
            id: id.into(),
            src: src.into(),
            ..Default::default()
        }))
        .with_group(group)
    }

    pub fn new_anchor(
        id: impl Into<String>,
        href: impl Into<String>,
        title: Message,
        group: NodeGroup,
    ) -> Self {
        Self::new(Attributes::Anchor(AnchorAttributes {
            id: id.into(),
            href: href.into(),
            title,
        }))
        .with_group(group)
    }

    pub fn new_script(
        id: impl Into<String>,
        src: impl Into<String>,
        integrity: impl Into<String>,
        group: NodeGroup,
    ) -> Self {
        Self::new(Attributes::Script(ScriptAttributes {
            id: id.into(),
            src: src.into(),
            integrity: integrity.into(),
            is_async: true,
            referrerpolicy: "no-referrer".to_string(),
            crossorigin: "anonymous".to_string(),
            script_type: "text/javascript".to_string(),
            ..Default::default()
        }))
        .with_group(group)
    }

    pub fn new_division(id: impl Into<String>, group: NodeGroup) -> Self {
        Self::new(Attributes::Division(DivisionAttributes {
            id: id.into(),
            ..Default::default()
        }))
        .with_group(group)
    }

    pub fn with_group(mut self, group: NodeGroup) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_type(mut self, node_type: NodeType) -> Self {
        self.node_type = Some(node_type);
        self
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Marks an input node as required. Has no effect on other node types.
    pub fn with_required(mut self) -> Self {
        if let Attributes::Input(input) = &mut self.attributes {
            input.required = true;
        }
        self
    }

    /// Attaches or replaces the node's label.
    pub fn with_meta_label(mut self, label: Message) -> Self {
        self.set_meta_label(Some(label));
        self
    }

    pub fn set_meta_label(&mut self, label: Option<Message>) {
        self.meta.label = label;
    }

    /// The node's identity, as exposed by its attribute payload.
    pub fn id(&self) -> &str {
        self.attributes.id()
    }

    /// The attribute payload's current value.
    pub fn value(&self) -> Value {
        self.attributes.value()
    }

    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.attributes.set_value(value.into());
    }

    /// Clears messages and any submitted state, keeping identity, type and group.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.attributes.reset();
    }

    /// Partial match against a needle. Empty identity, type or group on the
    /// needle act as wildcards; the attribute payloads are compared last.
    ///
    /// For inputs only the name and a non-null value are compared. The input
    /// `type` is ignored because [`InputAttributeType`] has no wildcard value.
    pub fn matches(&self, needle: &Node) -> bool {
        if !needle.id().is_empty() && self.id() != needle.id() {
            return false;
        }

        if let Some(node_type) = needle.node_type {
            if self.attributes.node_type() != node_type {
                return false;
            }
        }

        if needle.group.is_some() && self.group != needle.group {
            return false;
        }

        self.attributes
            .matches(&needle.attributes, needle.node_type.is_some())
    }
}
