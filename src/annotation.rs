//! Field-site metadata extraction.
//!
//! The extractor only reads the annotation set supplied by the referencing
//! parent field, never the descriptor's own intrinsic metadata: the same
//! descriptor can be referenced with different metadata from different
//! parents, so the annotations must travel with the reference.

use crate::descriptor::FieldAnnotation;
use crate::error::{AnnotationKind, SchemaError};

/// Read the enum allow-list for a field. Exactly one `EnumAllowList` must be
/// present in the set; zero and several are both caller defects.
pub fn extract_enum_allow_list(
    annotations: &[FieldAnnotation],
) -> Result<&[String], SchemaError> {
    let mut allow_list = None;
    let mut found = 0usize;
    for annotation in annotations {
        if let FieldAnnotation::EnumAllowList(entries) = annotation {
            found += 1;
            allow_list = Some(entries.as_slice());
        }
    }
    match (allow_list, found) {
        (Some(entries), 1) => Ok(entries),
        _ => Err(SchemaError::Annotation {
            required: AnnotationKind::EnumAllowList,
            found,
        }),
    }
}

/// Check the union-marker contract: exactly one `UnionMarker` in the set.
/// Only called when the generator runs in strict mode.
pub fn extract_union_marker(annotations: &[FieldAnnotation]) -> Result<(), SchemaError> {
    let found = annotations
        .iter()
        .filter(|annotation| matches!(annotation, FieldAnnotation::UnionMarker))
        .count();
    if found == 1 {
        Ok(())
    } else {
        Err(SchemaError::Annotation {
            required: AnnotationKind::UnionMarker,
            found,
        })
    }
}

// ------------------------------- Tests ------------------------------------ //
