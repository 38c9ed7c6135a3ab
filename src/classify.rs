//! Kind classification: raw descriptor tags → conversion strategy.

use crate::descriptor::{DescriptorKind, TypeDescriptor};

/// Conversion strategy for one descriptor. Integral widths collapse to
/// `Integer`, floating widths to `Number`. Classification is total over the
/// closed tag set: unsupported kinds still classify, and the walker rejects
/// them, keeping this function pure and side-effect-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Enum,
    Boolean,
    Integer,
    Number,
    String,
    Char,
    Object,
    Array,
    Map,
    SealedUnion,
    OpenPolymorphic,
    Contextual,
}

impl Kind {
    /// Whether the walker has a schema mapping for this kind. `char`, maps,
    /// contextual descriptors, and open polymorphism are hard failures.
    pub fn is_supported(self) -> bool {
        !matches!(
            self,
            Kind::Char | Kind::Map | Kind::Contextual | Kind::OpenPolymorphic
        )
    }
}

pub fn classify(descriptor: &dyn TypeDescriptor) -> Kind {
    match descriptor.kind() {
        DescriptorKind::Enum => Kind::Enum,
        DescriptorKind::Boolean => Kind::Boolean,
        DescriptorKind::Byte
        | DescriptorKind::Short
        | DescriptorKind::Int
        | DescriptorKind::Long => Kind::Integer,
        DescriptorKind::Float | DescriptorKind::Double => Kind::Number,
        DescriptorKind::String => Kind::String,
        DescriptorKind::Char => Kind::Char,
        DescriptorKind::Class => Kind::Object,
        DescriptorKind::List => Kind::Array,
        DescriptorKind::Map => Kind::Map,
        DescriptorKind::Sealed => Kind::SealedUnion,
        DescriptorKind::Open => Kind::OpenPolymorphic,
        DescriptorKind::Contextual => Kind::Contextual,
    }
}

// ------------------------------- Tests ------------------------------------ //
