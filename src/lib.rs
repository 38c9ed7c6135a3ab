//! Convert a type-descriptor tree into a JSON Schema document.
//!
//! A descriptor describes the *shape* of a statically defined data model:
//! a kind tag, named child elements, and metadata declared at the field
//! sites that reference other types. [`SchemaGenerator`] walks that tree
//! once, top-down, and assembles a deliberately narrow draft-04 subset
//! (`type`, `properties`, `items`, `enum`, `anyOf`) bottom-up.
//!
//! Producing descriptors (derive macros, registries, hand-written trees)
//! and rendering the finished document as text are both the caller's
//! business; the crate's obligation ends at the in-memory
//! [`SchemaDocument`] value.

pub mod annotation;
pub mod classify;
pub mod cli;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod node;
pub mod sample;

pub use classify::{Kind, classify};
pub use descriptor::{DescriptorKind, FieldAnnotation, OwnedDescriptor, TypeDescriptor};
pub use error::{AnnotationKind, SchemaError};
pub use generator::{SchemaGenerator, accept};
pub use node::{SchemaDocument, SchemaNode};
