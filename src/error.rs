use crate::node::NodeType;
use thiserror::Error;

/// Errors that can occur while decoding a node from its wire representation.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("unexpected node type: {0}")]
    UnexpectedNodeType(String),

    #[error(
        "node attributes are stamped as '{attribute_type}' but the node declares type '{node_type}'"
    )]
    AttributeTypeMismatch {
        node_type: NodeType,
        attribute_type: String,
    },

    #[error("failed to parse node JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while encoding a node to its wire representation.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("node type and node attributes mismatch: {attribute_type} != {node_type}")]
    TypeMismatch {
        node_type: NodeType,
        attribute_type: NodeType,
    },

    #[error("failed to serialize node JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by a schema key-order lookup.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("schema '{0}' is not registered")]
    UnknownSchema(String),

    #[error("schema '{schema_ref}' is invalid: {message}")]
    InvalidSchema { schema_ref: String, message: String },

    #[error("could not read schema '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("schema lookup for '{0}' was cancelled")]
    Cancelled(String),
}

/// Errors that abort a sort before any reordering is applied.
#[derive(Error, Debug)]
pub enum SortError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("sorting by schema '{0}' requires a key-order provider")]
    ProviderRequired(String),
}
