//! Decoded struct declaration generator for the capture/replay toolchain.
//!
//! Consumes a metadata snapshot of a foreign API's parameter structs and
//! emits, per feature, the C++ wrapper declarations holding the decoded
//! storage slots needed to reconstruct each struct from a capture stream.
//!

// crate-specific lint exceptions:
//#![allow()]

pub(crate) mod classifier;
pub(crate) mod declarations;
pub(crate) mod emitter;
pub(crate) mod errors;
pub(crate) mod metadata;
pub(crate) mod naming;
pub(crate) mod registry;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub use classifier::{
    needs_slot, TypeClassifier, TypeKind, EXTENSION_CHAIN_MEMBER, EXTENSION_CHAIN_SLOT_TYPE,
};
pub use declarations::{DecodedStructDeclaration, SlotField, StructDeclarationBuilder};
pub use emitter::FeatureEmitter;
pub use errors::{Error, Result};
pub use metadata::{ApiMetadata, Feature, MemberDescriptor, StructDescriptor};
pub use naming::{DecoderTypeNamer, SlotTypeResolver};
pub use registry::TypeRegistry;

/// Composes the declaration blocks for every feature in the snapshot.
///
/// Features with no in-scope structs contribute nothing, not even a
/// separator. `prefix` and `suffix` are the caller's file scaffolding
/// (include directives, namespace wrapping) and are inserted verbatim, each
/// separated from the declaration blocks by one blank line; they are
/// expected to end with a newline of their own.
///
/// # Errors
///
/// If any member's base type cannot be classified or its slot type cannot
/// be named.
pub fn compose(
    metadata: &ApiMetadata,
    prefix: Option<&str>,
    suffix: Option<&str>,
) -> Result<String> {
    let namer = DecoderTypeNamer::new(&metadata.types);
    let emitter = FeatureEmitter::new(&metadata.types, &namer);

    let mut blocks = String::new();

    for feature in &metadata.features {
        if !FeatureEmitter::has_work(&feature.structs) {
            debug!(feature = feature.name.as_str(), "no structs in scope, skipping");
            continue;
        }

        if !blocks.is_empty() {
            blocks.push('\n');
        }

        blocks.push_str(&emitter.emit(&feature.name, &feature.structs)?);
    }

    let mut content = String::new();

    if let Some(prefix) = prefix {
        content.push_str(prefix);

        if !blocks.is_empty() {
            content.push('\n');
        }
    }

    content.push_str(&blocks);

    if let Some(suffix) = suffix {
        if !blocks.is_empty() {
            content.push('\n');
        }

        content.push_str(suffix);
    }

    Ok(content)
}

/// Generates the decoded struct declarations for the snapshot at
/// `metadata_path` and writes them to `output_path`.
///
/// # Errors
///
/// If the snapshot cannot be read or parsed, if composition fails, or if
/// the output file cannot be written.
pub fn generate(
    metadata_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    prefix: Option<&str>,
    suffix: Option<&str>,
) -> Result<PathBuf> {
    let data = std::fs::read_to_string(metadata_path.as_ref())?;
    let metadata: ApiMetadata = serde_yaml::from_str(&data)?;

    let content = compose(&metadata, prefix, suffix)?;

    let output_path = output_path.as_ref().to_path_buf();

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(&output_path, content)?;
    info!(path = %output_path.display(), "wrote decoded struct declarations");

    Ok(output_path)
}
