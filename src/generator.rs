//! Recursive tree walker and document assembler.
//!
//! One top-down pass over an immutable descriptor tree; schema nodes are
//! assembled bottom-up and never revisited. The walk is a pure function of
//! `(descriptor, annotations)`, so conversions of disjoint trees can run
//! concurrently with no coordination.
//!
//! The tree is assumed finite: self-referential type models recurse without
//! bound and are out of contract.

use indexmap::IndexMap;

use crate::annotation::{extract_enum_allow_list, extract_union_marker};
use crate::classify::{Kind, classify};
use crate::descriptor::{FieldAnnotation, TypeDescriptor};
use crate::error::SchemaError;
use crate::node::{SchemaDocument, SchemaNode};

/// Descriptor → schema conversion entry point.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaGenerator {
    require_union_marker: bool,
}

impl SchemaGenerator {
    /// Relaxed contract: sealed-union references convert whether or not
    /// they carry a `UnionMarker`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict contract: every sealed-union reference must carry exactly one
    /// `UnionMarker` annotation.
    pub fn strict() -> Self {
        Self {
            require_union_marker: true,
        }
    }

    /// Convert a whole descriptor tree, wrapping the root fragment with the
    /// draft-04 banner.
    pub fn accept(&self, descriptor: &dyn TypeDescriptor) -> Result<SchemaDocument, SchemaError> {
        let root = self.walk(descriptor, &[])?;
        Ok(SchemaDocument { root })
    }

    /// Convert one descriptor, given the annotations declared at the parent
    /// field referencing it (empty at the root).
    pub fn walk(
        &self,
        descriptor: &dyn TypeDescriptor,
        inherited: &[FieldAnnotation],
    ) -> Result<SchemaNode, SchemaError> {
        let kind = classify(descriptor);
        match kind {
            Kind::Boolean => Ok(SchemaNode::boolean()),
            Kind::Integer => Ok(SchemaNode::integer()),
            Kind::Number => Ok(SchemaNode::number()),
            Kind::String => Ok(SchemaNode::string()),
            Kind::Enum => {
                let allow_list = extract_enum_allow_list(inherited)?;
                Ok(SchemaNode::enumeration(allow_list.iter().cloned()))
            }
            Kind::Object => self.walk_object(descriptor),
            Kind::Array => self.walk_array(descriptor),
            Kind::SealedUnion => self.walk_sealed_union(descriptor, inherited),
            Kind::Char | Kind::Map | Kind::Contextual | Kind::OpenPolymorphic => {
                Err(SchemaError::UnsupportedKind { kind })
            }
        }
    }

    fn walk_object(&self, descriptor: &dyn TypeDescriptor) -> Result<SchemaNode, SchemaError> {
        let mut properties = IndexMap::with_capacity(descriptor.element_count());
        for index in 0..descriptor.element_count() {
            let name = descriptor.element_name(index).to_owned();
            // Annotations declared at this field site, not the set our own
            // parent handed down.
            let annotations = descriptor.element_annotations(index);
            let node = self.walk(descriptor.element_descriptor(index), annotations)?;
            properties.insert(name, node);
        }
        Ok(SchemaNode::Object(properties))
    }

    fn walk_array(&self, descriptor: &dyn TypeDescriptor) -> Result<SchemaNode, SchemaError> {
        let found = descriptor.element_count();
        if found != 1 {
            return Err(SchemaError::Structure {
                shape: "array",
                expected: 1,
                found,
            });
        }
        let item = self.walk(descriptor.element_descriptor(0), &[])?;
        Ok(SchemaNode::Array(Box::new(item)))
    }

    fn walk_sealed_union(
        &self,
        descriptor: &dyn TypeDescriptor,
        inherited: &[FieldAnnotation],
    ) -> Result<SchemaNode, SchemaError> {
        if self.require_union_marker {
            extract_union_marker(inherited)?;
        }
        let variants = descriptor.variant_descriptors()?;
        let mut nodes = Vec::with_capacity(variants.len());
        for variant in variants {
            nodes.push(self.walk(variant, &[])?);
        }
        Ok(SchemaNode::AnyOf(nodes))
    }
}

/// One-shot conversion under the relaxed contract.
pub fn accept(descriptor: &dyn TypeDescriptor) -> Result<SchemaDocument, SchemaError> {
    SchemaGenerator::new().accept(descriptor)
}

// ------------------------------- Tests ------------------------------------ //
