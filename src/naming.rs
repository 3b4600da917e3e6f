//! Decoded slot type naming.
//!
//! The declaration builder only decides *whether* a member gets a slot; the
//! slot's type name comes from a [`SlotTypeResolver`]. The toolchain's own
//! grammar is implemented by [`DecoderTypeNamer`], but the builder works
//! against the trait so tests and other frontends can substitute their own.

use crate::classifier::{TypeClassifier, TypeKind};
use crate::registry::TypeRegistry;

/// Names the decoded slot type for a member, given its declared base type
/// and shape.
///
/// Called only for members that need a slot and are not the extension-chain
/// field. `None` means no name could be derived, which the caller reports
/// as an error; a guessed name would produce a declaration that compiles
/// with the wrong shape, or not at all.
pub trait SlotTypeResolver {
    fn slot_type(&self, base_type: &str, is_pointer: bool, is_array: bool) -> Option<String>;
}

/// Slot naming grammar for the capture toolchain's decoder templates.
#[derive(Debug, Clone, Copy)]
pub struct DecoderTypeNamer<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> DecoderTypeNamer<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }
}

impl SlotTypeResolver for DecoderTypeNamer<'_> {
    fn slot_type(&self, base_type: &str, is_pointer: bool, is_array: bool) -> Option<String> {
        let type_name = match self.registry.classify(base_type)? {
            TypeKind::Struct => {
                if is_pointer || is_array {
                    format!("StructPointerDecoder<Decoded_{}>", base_type)
                } else {
                    format!("Decoded_{}", base_type)
                }
            }
            TypeKind::Handle => {
                if is_pointer || is_array {
                    "PointerDecoder<format::HandleId>".to_string()
                } else {
                    "format::HandleId".to_string()
                }
            }
            // Function pointers are captured as addresses.
            TypeKind::FunctionPointer => "uint64_t".to_string(),
            TypeKind::Plain => match base_type {
                "char" if is_pointer && is_array => "StringArrayDecoder".to_string(),
                "char" => "StringDecoder".to_string(),
                "wchar_t" => "WStringDecoder".to_string(),
                _ if is_pointer || is_array => format!("PointerDecoder<{}>", base_type),
                // A plain scalar by value never needs a slot, so there is
                // nothing sensible to name here.
                _ => return None,
            },
        };

        Some(type_name)
    }
}
