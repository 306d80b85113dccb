//! Common test utilities for building node collections and schemas.
use serde_json::{Value, json};
use ui_nodes::prelude::*;

/// Creates a hidden input node in the default group.
#[allow(dead_code)]
pub fn hidden(name: &str, value: &str) -> Node {
    Node::new_input_field(name, value, NodeGroup::Default, InputAttributeType::Hidden)
}

/// Creates a text input node with no value.
#[allow(dead_code)]
pub fn input(name: &str, group: NodeGroup) -> Node {
    Node::new_input_field(name, Value::Null, group, InputAttributeType::Text)
}

/// Creates an input node carrying a value.
#[allow(dead_code)]
pub fn input_with_value(name: &str, value: &str, group: NodeGroup) -> Node {
    Node::new_input_field(name, value, group, InputAttributeType::Text)
}

/// Creates the submit node for a group.
#[allow(dead_code)]
pub fn method(value: &str, group: NodeGroup) -> Node {
    Node::new_input_field("method", value, group, InputAttributeType::Submit)
}

/// Creates a typical password login form as produced by a first flow pass.
///
/// Order: `csrf_token`, `identifier`, `password`, `method`.
#[allow(dead_code)]
pub fn create_login_nodes() -> Nodes {
    let mut nodes = Nodes::new();
    nodes.upsert(hidden("csrf_token", "f00d"));
    nodes.upsert(
        input("identifier", NodeGroup::Default)
            .with_required()
            .with_meta_label(Message::info(1070004, "ID")),
    );
    nodes.upsert(
        Node::new_input_field(
            "password",
            Value::Null,
            NodeGroup::Password,
            InputAttributeType::Password,
        )
        .with_required()
        .with_meta_label(Message::info(1070001, "Password")),
    );
    nodes.upsert(method("password", NodeGroup::Password));
    nodes
}

/// Creates one node of every attribute variant.
#[allow(dead_code)]
pub fn create_mixed_nodes() -> Nodes {
    vec![
        input_with_value("traits.email", "foo@bar.com", NodeGroup::Profile),
        Node::new_text(
            "totp_secret_key",
            Message::info(1050006, "JBSWY3DPEHPK3PXP"),
            NodeGroup::Totp,
        ),
        Node::new_image("totp_qr", "data:image/png;base64,iVBOR", NodeGroup::Totp),
        Node::new_anchor(
            "recovery_link",
            "https://example.org/recovery",
            Message::info(1070011, "Forgot password?"),
            NodeGroup::Link,
        ),
        Node::new_script(
            "webauthn_script",
            "https://example.org/.well-known/webauthn.js",
            "sha512-abc",
            NodeGroup::WebAuthn,
        ),
        Node::new_division("captcha", NodeGroup::Captcha),
    ]
    .into()
}

/// Creates an identity schema with nested traits and a `$ref`.
#[allow(dead_code)]
pub fn create_identity_schema() -> Value {
    json!({
        "$id": "https://example.org/identity.schema.json",
        "type": "object",
        "definitions": {
            "name": {
                "type": "object",
                "properties": {
                    "first": {"type": "string"},
                    "last": {"type": "string"}
                }
            }
        },
        "properties": {
            "traits": {
                "type": "object",
                "properties": {
                    "email": {"type": "string", "format": "email"},
                    "name": {"$ref": "#/definitions/name"},
                    "website": {"type": "string"}
                }
            }
        }
    })
}
