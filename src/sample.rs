//! Demonstration data model: a hand-written descriptor tree for a small
//! media-catalog payload, exercising every supported kind (scalars, nested
//! class, list, sealed union, annotated enums).

use crate::descriptor::{DescriptorKind, FieldAnnotation, OwnedDescriptor};

const COLLECTION: &str = "COLLECTION";
const MOVIE: &str = "MOVIE";
const SERIAL: &str = "SERIAL";

fn allow_list(entries: &[&str]) -> FieldAnnotation {
    FieldAnnotation::EnumAllowList(entries.iter().map(|s| s.to_string()).collect())
}

/// Root of the sample model.
pub fn example_data() -> OwnedDescriptor {
    OwnedDescriptor::new(DescriptorKind::Class)
        .element("name", OwnedDescriptor::scalar(DescriptorKind::String))
        .element("id", OwnedDescriptor::scalar(DescriptorKind::Int))
        .element("nestedData", nested_data())
        .annotated_element(
            "sealedData",
            vec![FieldAnnotation::UnionMarker],
            sealed_data(),
        )
        .element(
            "someList",
            OwnedDescriptor::list(OwnedDescriptor::scalar(DescriptorKind::String)),
        )
        .annotated_element(
            "type",
            vec![allow_list(&[COLLECTION, MOVIE])],
            element_type(),
        )
}

fn nested_data() -> OwnedDescriptor {
    OwnedDescriptor::new(DescriptorKind::Class)
        .element("title", OwnedDescriptor::scalar(DescriptorKind::String))
        .element("isBest", OwnedDescriptor::scalar(DescriptorKind::Boolean))
        .annotated_element(
            "elementType",
            vec![allow_list(&[COLLECTION, MOVIE, SERIAL])],
            element_type(),
        )
}

fn sealed_data() -> OwnedDescriptor {
    let child = || {
        OwnedDescriptor::new(DescriptorKind::Class)
            .element("id", OwnedDescriptor::scalar(DescriptorKind::Int))
    };
    OwnedDescriptor::sealed([("SealedDataChild1", child()), ("SealedDataChild2", child())])
}

// The enum descriptor carries no members: the walker only reads the
// allow-list declared at the referencing field.
fn element_type() -> OwnedDescriptor {
    OwnedDescriptor::scalar(DescriptorKind::Enum)
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SchemaGenerator;
    use serde_json::json;

    #[test]
    fn sample_model_converts_end_to_end() {
        // the model declares its union marker, so strict mode passes too
        let document = SchemaGenerator::strict().accept(&example_data()).unwrap();
        assert_eq!(
            document.to_value(),
            json!({
                "$schema": "http://json-schema.org/draft-04/schema",
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "id": { "type": "integer" },
                    "nestedData": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "isBest": { "type": "boolean" },
                            "elementType": {
                                "type": "string",
                                "enum": ["COLLECTION", "MOVIE", "SERIAL"],
                            },
                        }
                    },
                    "sealedData": {
                        "anyOf": [
                            {
                                "type": "object",
                                "properties": { "id": { "type": "integer" } }
                            },
                            {
                                "type": "object",
                                "properties": { "id": { "type": "integer" } }
                            },
                        ]
                    },
                    "someList": {
                        "type": "array",
                        "items": { "type": "string" }
                    },
                    "type": {
                        "type": "string",
                        "enum": ["COLLECTION", "MOVIE"],
                    },
                }
            })
        );
    }

    #[test]
    fn allow_lists_differ_per_referencing_field() {
        let document = SchemaGenerator::new().accept(&example_data()).unwrap();
        let value = document.to_value();
        // same enum descriptor, two different field-site allow-lists
        assert_eq!(value["properties"]["type"]["enum"], json!(["COLLECTION", "MOVIE"]));
        assert_eq!(
            value["properties"]["nestedData"]["properties"]["elementType"]["enum"],
            json!(["COLLECTION", "MOVIE", "SERIAL"])
        );
    }
}
