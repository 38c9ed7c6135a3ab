//! The descriptor contract: what the core needs from an externally built
//! description of a type's shape.
//!
//! Descriptors exist before conversion starts (derive macros, registries, or
//! hand-written trees), are never mutated, and are read top-down exactly
//! once. The core never constructs descriptors itself; it only consumes the
//! read-only accessors below.

use crate::error::SchemaError;

// ————————————————————————————————————————————————————————————————————————————
// CONTRACT
// ————————————————————————————————————————————————————————————————————————————

/// Raw kind tag carried by a descriptor, before classification collapses
/// integral and floating-point widths into their schema types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    Enum,
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    Char,
    Class,
    List,
    Map,
    Sealed,
    Open,
    Contextual,
}

/// Metadata declared where a descriptor is *referenced*, not where it is
/// defined. The same descriptor can carry different annotations under
/// different parent fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAnnotation {
    /// Ordered allow-list of permitted string values for an enum-typed
    /// field. Authoritative: order is preserved, entries are never
    /// deduplicated or cross-checked against the enum's declared members.
    EnumAllowList(Vec<String>),
    /// Presence-only marker on a reference to a sealed-union type.
    UnionMarker,
}

/// Read-only view over one node of a type-shape tree.
pub trait TypeDescriptor: std::fmt::Debug {
    fn kind(&self) -> DescriptorKind;
    fn element_count(&self) -> usize;
    fn element_name(&self, index: usize) -> &str;
    fn element_annotations(&self, index: usize) -> &[FieldAnnotation];
    fn element_descriptor(&self, index: usize) -> &dyn TypeDescriptor;

    /// Concrete variant descriptors of a sealed union, in declaration order.
    ///
    /// Default shape: exactly two top-level elements — a discriminator at
    /// index 0 (its shape is irrelevant to the schema) and a holder at
    /// index 1 whose children are the variants. Collaborators that expose
    /// closed unions differently override this instead of faking that
    /// layout.
    fn variant_descriptors(&self) -> Result<Vec<&dyn TypeDescriptor>, SchemaError> {
        let found = self.element_count();
        if found != 2 {
            return Err(SchemaError::Structure {
                shape: "sealed union",
                expected: 2,
                found,
            });
        }
        let holder = self.element_descriptor(1);
        Ok((0..holder.element_count())
            .map(|index| holder.element_descriptor(index))
            .collect())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// HAND-WRITTEN TREES
// ————————————————————————————————————————————————————————————————————————————

/// Descriptor tree for callers without a derive or registry facility.
/// Assembled once with the chaining constructors, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedDescriptor {
    kind: DescriptorKind,
    elements: Vec<OwnedElement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OwnedElement {
    name: String,
    annotations: Vec<FieldAnnotation>,
    descriptor: OwnedDescriptor,
}

impl OwnedDescriptor {
    pub fn new(kind: DescriptorKind) -> Self {
        Self {
            kind,
            elements: Vec::new(),
        }
    }

    /// Leaf descriptor with no child elements. Also fits enum descriptors:
    /// the walker never reads an enum's intrinsic members, only the
    /// allow-list supplied at the referencing field.
    pub fn scalar(kind: DescriptorKind) -> Self {
        Self::new(kind)
    }

    /// List descriptor exposing its single item type.
    pub fn list(item: OwnedDescriptor) -> Self {
        Self::new(DescriptorKind::List).element("item", item)
    }

    /// Sealed-union descriptor in the discriminator + variants-holder shape
    /// the default `variant_descriptors` expects.
    pub fn sealed<I>(variants: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, OwnedDescriptor)>,
    {
        let mut holder = Self::new(DescriptorKind::Class);
        for (name, descriptor) in variants {
            holder = holder.element(name, descriptor);
        }
        Self::new(DescriptorKind::Sealed)
            .element("type", Self::scalar(DescriptorKind::String))
            .element("value", holder)
    }

    /// Append an un-annotated child element.
    pub fn element(self, name: &str, descriptor: OwnedDescriptor) -> Self {
        self.annotated_element(name, Vec::new(), descriptor)
    }

    /// Append a child element with metadata declared at this field site.
    pub fn annotated_element(
        mut self,
        name: &str,
        annotations: Vec<FieldAnnotation>,
        descriptor: OwnedDescriptor,
    ) -> Self {
        self.elements.push(OwnedElement {
            name: name.to_owned(),
            annotations,
            descriptor,
        });
        self
    }
}

impl TypeDescriptor for OwnedDescriptor {
    fn kind(&self) -> DescriptorKind {
        self.kind
    }

    fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn element_name(&self, index: usize) -> &str {
        &self.elements[index].name
    }

    fn element_annotations(&self, index: usize) -> &[FieldAnnotation] {
        &self.elements[index].annotations
    }

    fn element_descriptor(&self, index: usize) -> &dyn TypeDescriptor {
        &self.elements[index].descriptor
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sealed_builder_matches_default_variant_shape() {
        let union = OwnedDescriptor::sealed([
            ("A", OwnedDescriptor::scalar(DescriptorKind::Int)),
            ("B", OwnedDescriptor::scalar(DescriptorKind::String)),
        ]);
        assert_eq!(union.element_count(), 2);
        assert_eq!(union.element_name(0), "type");

        let variants = union.variant_descriptors().unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].kind(), DescriptorKind::Int);
        assert_eq!(variants[1].kind(), DescriptorKind::String);
    }

    #[test]
    fn variant_descriptors_rejects_wrong_arity() {
        let three = OwnedDescriptor::new(DescriptorKind::Sealed)
            .element("type", OwnedDescriptor::scalar(DescriptorKind::String))
            .element("value", OwnedDescriptor::new(DescriptorKind::Class))
            .element("extra", OwnedDescriptor::scalar(DescriptorKind::Int));
        let err = three.variant_descriptors().unwrap_err();
        assert_eq!(
            err,
            SchemaError::Structure {
                shape: "sealed union",
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn annotations_live_at_the_referencing_field() {
        let class = OwnedDescriptor::new(DescriptorKind::Class).annotated_element(
            "mode",
            vec![FieldAnnotation::EnumAllowList(vec!["ON".into(), "OFF".into()])],
            OwnedDescriptor::scalar(DescriptorKind::Enum),
        );
        assert_eq!(class.element_annotations(0).len(), 1);
        // the child itself carries nothing
        assert_eq!(class.element_descriptor(0).element_count(), 0);
    }
}
