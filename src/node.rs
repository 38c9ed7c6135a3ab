//! Strongly-typed schema fragments. No `serde_json::Value` until emission.
//!
//! Every node holds exactly one shape; the emitted JSON never mixes `enum`,
//! `properties`, `items`, and `anyOf` on one object, and never uses any
//! vocabulary beyond `type`/`enum`/`properties`/`items`/`anyOf` plus the
//! document-level `$schema` banner.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Value, json};

/// Fixed version banner emitted at the document root.
pub const SCHEMA_VERSION: &str = "http://json-schema.org/draft-04/schema";

/// One JSON Schema fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Boolean,
    Integer,
    Number,
    String,
    /// `{type: "string", enum: [...]}` — order preserved, never deduplicated.
    Enum(Vec<String>),
    /// `{type: "object", properties: {...}}` in field declaration order.
    Object(IndexMap<String, SchemaNode>),
    /// `{type: "array", items: ...}`.
    Array(Box<SchemaNode>),
    /// `{anyOf: [...]}` — no `type` key at this level.
    AnyOf(Vec<SchemaNode>),
}

impl SchemaNode {
    pub fn boolean() -> Self {
        SchemaNode::Boolean
    }

    pub fn integer() -> Self {
        SchemaNode::Integer
    }

    pub fn number() -> Self {
        SchemaNode::Number
    }

    pub fn string() -> Self {
        SchemaNode::String
    }

    /// String node restricted to an explicit allow-list. The list is
    /// authoritative: no sorting, no deduplication, no cross-check against
    /// whatever members the enum type itself declares.
    pub fn enumeration<I, S>(allow_list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SchemaNode::Enum(allow_list.into_iter().map(Into::into).collect())
    }

    /// Emit the fragment as a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            SchemaNode::Boolean => json!({ "type": "boolean" }),
            SchemaNode::Integer => json!({ "type": "integer" }),
            SchemaNode::Number => json!({ "type": "number" }),
            SchemaNode::String => json!({ "type": "string" }),
            SchemaNode::Enum(allow_list) => json!({ "type": "string", "enum": allow_list }),
            SchemaNode::Object(properties) => {
                let mut props = serde_json::Map::new();
                for (name, node) in properties {
                    props.insert(name.clone(), node.to_value());
                }
                json!({ "type": "object", "properties": props })
            }
            SchemaNode::Array(item) => json!({ "type": "array", "items": item.to_value() }),
            SchemaNode::AnyOf(variants) => json!({
                "anyOf": variants.iter().map(SchemaNode::to_value).collect::<Vec<_>>(),
            }),
        }
    }
}

impl Serialize for SchemaNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// Root fragment plus the fixed draft-04 banner. Emission merges the banner
/// ahead of the root node's own keys into a single JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    pub root: SchemaNode,
}

impl SchemaDocument {
    pub fn to_value(&self) -> Value {
        let mut document = serde_json::Map::new();
        document.insert("$schema".into(), Value::from(SCHEMA_VERSION));
        let Value::Object(fields) = self.root.to_value() else {
            unreachable!("schema nodes always emit JSON objects");
        };
        for (key, value) in fields {
            document.insert(key, value);
        }
        Value::Object(document)
    }
}

impl Serialize for SchemaDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

// ------------------------------- Tests ------------------------------------ //
