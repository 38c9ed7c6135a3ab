//! Failure taxonomy for descriptor → schema conversion.
//!
//! Every failure is synchronous and fatal to the `walk`/`accept` call that
//! raised it; there is no partial schema output and nothing to retry. These
//! are defects in how the caller defined the type model or its metadata —
//! fix the model and convert again.

use thiserror::Error;

use crate::classify::Kind;

/// Which field-site annotation a failing extraction was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    EnumAllowList,
    UnionMarker,
}

impl std::fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnotationKind::EnumAllowList => write!(f, "enum allow-list"),
            AnnotationKind::UnionMarker => write!(f, "union marker"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Descriptor kind has no JSON Schema mapping.
    #[error("descriptor with kind {kind:?} is not supported")]
    UnsupportedKind { kind: Kind },

    /// A reference that demands field metadata did not carry exactly one
    /// of its required annotation.
    #[error("expected exactly one {required} annotation, found {found}")]
    Annotation {
        required: AnnotationKind,
        found: usize,
    },

    /// A composite descriptor exposed the wrong number of child elements.
    #[error(
        "{shape} descriptor has returned inconsistent number of elements: \
         expected {expected}, found {found}"
    )]
    Structure {
        shape: &'static str,
        expected: usize,
        found: usize,
    },
}
