use super::{Attributes, Meta, Node, NodeGroup, NodeType};
use crate::error::{DecodeError, EncodeError};
use crate::text::Messages;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Outgoing wire record, borrowing from the node.
#[derive(Serialize)]
struct WireNodeRef<'a> {
    #[serde(rename = "type")]
    node_type: NodeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<NodeGroup>,
    attributes: &'a Attributes,
    messages: &'a Messages,
    meta: &'a Meta,
}

/// Incoming wire record with the attribute payload left undecoded.
#[derive(Deserialize)]
struct WireNode {
    #[serde(rename = "type")]
    node_type: NodeType,
    #[serde(default)]
    group: Option<NodeGroup>,
    #[serde(default)]
    attributes: Value,
    #[serde(default)]
    messages: Option<Messages>,
    #[serde(default)]
    meta: Option<Meta>,
}

impl Node {
    /// The discriminator to put on the wire: the one implied by the attribute
    /// variant, provided an explicitly set `node_type` agrees with it.
    pub fn resolve_type(&self) -> Result<NodeType, EncodeError> {
        let implied = self.attributes.node_type();
        match self.node_type {
            Some(node_type) if node_type != implied => Err(EncodeError::TypeMismatch {
                node_type,
                attribute_type: implied,
            }),
            _ => Ok(implied),
        }
    }

    /// Backfills `node_type` from the attribute variant, as encoding does.
    pub fn normalize(&mut self) -> Result<(), EncodeError> {
        self.node_type = Some(self.resolve_type()?);
        Ok(())
    }

    pub fn to_value(&self) -> Result<Value, EncodeError> {
        self.resolve_type()?;
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> Result<String, EncodeError> {
        self.resolve_type()?;
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        let raw: Value = serde_json::from_str(json)?;
        Self::from_value(raw)
    }

    /// Decodes a node, choosing the attribute variant from the record's `type`.
    pub fn from_value(raw: Value) -> Result<Self, DecodeError> {
        let type_name = raw.get("type").and_then(Value::as_str).unwrap_or_default();
        let node_type: NodeType = type_name
            .parse()
            .map_err(DecodeError::UnexpectedNodeType)?;

        let wire: WireNode = serde_json::from_value(raw)?;

        if let Some(stamp) = wire.attributes.get("node_type").and_then(Value::as_str) {
            if stamp != node_type.as_str() {
                return Err(DecodeError::AttributeTypeMismatch {
                    node_type,
                    attribute_type: stamp.to_string(),
                });
            }
        }

        let attributes = Attributes::decode(wire.node_type, wire.attributes)?;

        Ok(Node {
            node_type: Some(wire.node_type),
            group: wire.group,
            attributes,
            messages: wire.messages.unwrap_or_default(),
            meta: wire.meta.unwrap_or_default(),
        })
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node_type = self.resolve_type().map_err(serde::ser::Error::custom)?;
        WireNodeRef {
            node_type,
            group: self.group,
            attributes: &self.attributes,
            messages: &self.messages,
            meta: &self.meta,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Node::from_value(raw).map_err(serde::de::Error::custom)
    }
}
