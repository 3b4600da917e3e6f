//! Name tables for the foreign API's types, deserialized from the metadata
//! snapshot. This is the snapshot-backed [`TypeClassifier`] the toolchain
//! uses by default.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::classifier::{TypeClassifier, TypeKind};

/// Scalar names the foreign API uses without declaring them anywhere in its
/// own specification.
const BUILTIN_SCALARS: &[&str] = &[
    "void",
    "char",
    "wchar_t",
    "float",
    "double",
    "int",
    "int8_t",
    "int16_t",
    "int32_t",
    "int64_t",
    "uint8_t",
    "uint16_t",
    "uint32_t",
    "uint64_t",
    "size_t",
];

/// Registry of known type names, grouped by kind.
///
/// Enums, bitmasks and platform-defined aliases all classify as plain: their
/// values are read directly from the original struct at use time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRegistry {
    #[serde(default)]
    pub structs: BTreeSet<String>,
    #[serde(default)]
    pub handles: BTreeSet<String>,
    #[serde(default)]
    pub function_pointers: BTreeSet<String>,
    #[serde(default)]
    pub platform_types: BTreeSet<String>,
}

impl TypeClassifier for TypeRegistry {
    fn classify(&self, base_type: &str) -> Option<TypeKind> {
        if self.structs.contains(base_type) {
            Some(TypeKind::Struct)
        } else if self.handles.contains(base_type) {
            Some(TypeKind::Handle)
        } else if self.function_pointers.contains(base_type) {
            Some(TypeKind::FunctionPointer)
        } else if self.platform_types.contains(base_type) || is_builtin_scalar(base_type) {
            Some(TypeKind::Plain)
        } else {
            None
        }
    }
}

fn is_builtin_scalar(base_type: &str) -> bool {
    BUILTIN_SCALARS.contains(&base_type)
}
