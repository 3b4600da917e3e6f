//! Member classification: decides which struct members need a decoded
//! storage slot in the generated wrapper declaration.

use crate::metadata::MemberDescriptor;

/// The reserved extension-chain member name. Shared with the decode/encode
/// machinery, which looks the chain up under this exact name; it is not
/// configurable per run.
pub const EXTENSION_CHAIN_MEMBER: &str = "pNext";

/// The fixed slot type for the extension chain: a single owning link to a
/// polymorphic extension node, resolved to its concrete variant per
/// instance at decode time.
pub const EXTENSION_CHAIN_SLOT_TYPE: &str = "std::unique_ptr<PNextNode>";

/// Classification of a member's declared base type, resolved against the
/// metadata snapshot's type tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Struct,
    Handle,
    FunctionPointer,
    Plain,
}

/// Resolves a base type name to its [`TypeKind`].
///
/// `None` means the name is absent from every table in the snapshot, which
/// is a metadata inconsistency, not an implicit `Plain`.
pub trait TypeClassifier {
    fn classify(&self, base_type: &str) -> Option<TypeKind>;
}

/// Whether a member's value needs a decoded slot alongside the original
/// struct pointer. Plain scalars and enums are read in place and need none.
pub fn needs_slot(member: &MemberDescriptor, kind: TypeKind) -> bool {
    member.is_pointer
        || member.is_array
        || matches!(
            kind,
            TypeKind::FunctionPointer | TypeKind::Handle | TypeKind::Struct
        )
}

/// The extension-chain override: applies before [`needs_slot`], purely by
/// name, regardless of the member's own shape. Its runtime type is only
/// knowable per instance, so it always gets the owning polymorphic link.
pub fn is_extension_chain(member: &MemberDescriptor) -> bool {
    member.name == EXTENSION_CHAIN_MEMBER
}
