//! Tests for a single node: identity, reset, matching and the wire codec.
mod common;
use common::*;
use serde_json::json;
use ui_nodes::prelude::*;

#[test]
fn test_round_trip_every_variant() {
    for node in create_mixed_nodes() {
        let encoded = node.to_json().expect("Failed to encode");
        let decoded = Node::from_json(&encoded).expect("Failed to decode");

        let mut expected = node.clone();
        expected.normalize().unwrap();
        assert_eq!(decoded, expected, "round trip changed node '{}'", node.id());
    }
}

#[test]
fn test_round_trip_keeps_messages_and_label() {
    let node = input_with_value("traits.email", "foo@bar", NodeGroup::Profile)
        .with_message(Message::error(4000001, "is not valid \"email\""))
        .with_meta_label(Message::info(1070002, "E-Mail"));

    let decoded = Node::from_json(&node.to_json().unwrap()).unwrap();
    assert_eq!(decoded.messages.len(), 1);
    assert_eq!(decoded.messages[0].message_type, MessageType::Error);
    assert_eq!(decoded.meta.label.as_ref().unwrap().text, "E-Mail");
    assert_eq!(decoded.value(), json!("foo@bar"));
}

#[test]
fn test_encode_backfills_type_and_stamps_attributes() {
    let node = Node::new_image("totp_qr", "data:image/png", NodeGroup::Totp);
    assert_eq!(node.node_type, None);

    let value = node.to_value().unwrap();
    assert_eq!(value["type"], "img");
    assert_eq!(value["attributes"]["node_type"], "img");
    assert_eq!(value["meta"], json!({}));

    let mut node = node;
    node.normalize().unwrap();
    assert_eq!(node.node_type, Some(NodeType::Image));
}

#[test]
fn test_encode_rejects_type_mismatch() {
    let node = input("identifier", NodeGroup::Default).with_type(NodeType::Text);

    match node.to_json() {
        Err(EncodeError::TypeMismatch {
            node_type,
            attribute_type,
        }) => {
            assert_eq!(node_type, NodeType::Text);
            assert_eq!(attribute_type, NodeType::Input);
        }
        other => panic!("Expected TypeMismatch error, got {:?}", other),
    }

    assert!(serde_json::to_string(&node).is_err());
}

#[test]
fn test_decode_rejects_unknown_type() {
    let err = Node::from_json(r#"{"type":"bogus","group":"default","attributes":{}}"#)
        .expect_err("bogus type must not decode");
    assert!(matches!(err, DecodeError::UnexpectedNodeType(ref t) if t == "bogus"));
    assert!(err.to_string().contains("unexpected node type"));
}

#[test]
fn test_decode_rejects_missing_attributes() {
    let result = Node::from_json(r#"{"type":"input","group":"default"}"#);
    assert!(matches!(result, Err(DecodeError::Json(_))));
}

#[test]
fn test_decode_rejects_conflicting_attribute_stamp() {
    let result = Node::from_value(json!({
        "type": "input",
        "group": "default",
        "attributes": {"node_type": "img", "name": "identifier", "type": "text"}
    }));
    assert!(matches!(
        result,
        Err(DecodeError::AttributeTypeMismatch { node_type: NodeType::Input, .. })
    ));
}

#[test]
fn test_decode_defaults_meta() {
    let node = Node::from_value(json!({
        "type": "a",
        "group": "link",
        "attributes": {
            "id": "recovery_link",
            "href": "https://example.org/recovery",
            "title": {"id": 1070011, "text": "Forgot password?", "type": "info"}
        },
        "messages": []
    }))
    .unwrap();

    assert_eq!(node.meta, Meta::default());
    assert_eq!(node.node_type, Some(NodeType::Anchor));
    assert_eq!(node.group, Some(NodeGroup::Link));
    assert_eq!(node.id(), "recovery_link");
}

#[test]
fn test_serde_integration() {
    let node = hidden("csrf_token", "f00d");
    let encoded = serde_json::to_string(&node).unwrap();
    let decoded: Node = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.id(), "csrf_token");
    assert_eq!(decoded.value(), json!("f00d"));

    assert!(serde_json::from_str::<Node>(r#"{"type":"blink"}"#).is_err());
}

#[test]
fn test_reset_keeps_identity() {
    let mut node = input_with_value("traits.email", "foo@bar.com", NodeGroup::Profile)
        .with_message(Message::error(4000001, "invalid"));

    node.reset();
    assert!(node.messages.is_empty());
    assert_eq!(node.value(), serde_json::Value::Null);
    assert_eq!(node.id(), "traits.email");
    assert_eq!(node.group, Some(NodeGroup::Profile));
}

#[test]
fn test_set_value_on_display_variants() {
    let mut image = Node::new_image("totp_qr", "old", NodeGroup::Totp);
    image.set_value("new");
    assert_eq!(image.value(), json!("new"));

    let mut division = Node::new_division("captcha", NodeGroup::Captcha);
    division.set_value("ignored");
    assert_eq!(division.value(), serde_json::Value::Null);
}

#[test]
fn test_matches_wildcards() {
    let node = input_with_value("traits.email", "foo@bar.com", NodeGroup::Profile);

    let by_group = Node::new(Attributes::Input(InputAttributes::default())).with_group(NodeGroup::Profile);
    assert!(node.matches(&by_group));

    let other_group = Node::new(Attributes::Input(InputAttributes::default())).with_group(NodeGroup::Password);
    assert!(!node.matches(&other_group));

    let by_id = input("traits.email", NodeGroup::Profile);
    assert!(node.matches(&by_id));

    let wrong_type = Node::new(Attributes::Input(InputAttributes::default())).with_type(NodeType::Text);
    assert!(!node.matches(&wrong_type));
}

#[test]
fn test_matches_ignores_input_type() {
    let node = Node::new_input_field("password", "", NodeGroup::Password, InputAttributeType::Password);
    let needle = Node::new(Attributes::Input(InputAttributes::new(
        "password",
        InputAttributeType::Text,
    )));
    assert!(node.matches(&needle));
}

#[test]
fn test_passkey_autocomplete_round_trip() {
    let node = Node::from_value(json!({
        "type": "input",
        "group": "passkey",
        "attributes": {
            "name": "identifier",
            "type": "text",
            "autocomplete": "username webauthn"
        }
    }))
    .unwrap();

    match &node.attributes {
        Attributes::Input(input) => {
            assert_eq!(input.autocomplete, Some(Autocomplete::UsernameWebAuthn))
        }
        other => panic!("Expected input attributes, got {:?}", other),
    }
    let value = node.to_value().unwrap();
    assert_eq!(value["attributes"]["autocomplete"], "username webauthn");
}

#[test]
fn test_division_data_encodes_sorted() {
    let mut data = std::collections::BTreeMap::new();
    data.insert("sitekey".to_string(), "0x4AAA".to_string());
    data.insert("action".to_string(), "login".to_string());
    data.insert("theme".to_string(), "auto".to_string());
    let node = Node::new(Attributes::Division(DivisionAttributes {
        id: "captcha".to_string(),
        class: None,
        data: Some(data),
    }))
    .with_group(NodeGroup::Captcha);

    let first = node.to_json().unwrap();
    assert_eq!(first, node.to_json().unwrap());
    assert!(first.contains(r#""data":{"action":"login","sitekey":"0x4AAA","theme":"auto"}"#));
}

#[test]
fn test_with_meta_label_replaces() {
    let node = input("identifier", NodeGroup::Default)
        .with_meta_label(Message::info(1, "first"))
        .with_meta_label(Message::info(2, "second"));
    assert_eq!(node.meta.label.unwrap().id, 2);
}
