//! Input model for one generation pass.
//!
//! The snapshot is produced by the toolchain's API-specification parser and
//! consumed here read-only. Member order within a struct is the foreign
//! declaration order and is preserved all the way to the emitted text, since
//! the decode/encode pass elsewhere in the toolchain walks members in that
//! same order.

use serde::Deserialize;

use crate::registry::TypeRegistry;

/// One member of a foreign API parameter struct.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDescriptor {
    pub name: String,
    pub base_type: String,
    #[serde(default)]
    pub is_pointer: bool,
    #[serde(default)]
    pub is_array: bool,
}

/// A foreign API parameter struct with its members in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructDescriptor {
    pub name: String,
    #[serde(default)]
    pub members: Vec<MemberDescriptor>,
}

/// A core API version or extension, gating which structs are in scope for
/// one generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub name: String,
    #[serde(default)]
    pub structs: Vec<StructDescriptor>,
}

/// The whole immutable metadata snapshot for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMetadata {
    #[serde(default)]
    pub types: TypeRegistry,
    #[serde(default)]
    pub features: Vec<Feature>,
}
