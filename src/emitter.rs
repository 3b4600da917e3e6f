//! Per-feature emission of decoded struct declarations.

use crate::classifier::TypeClassifier;
use crate::declarations::StructDeclarationBuilder;
use crate::errors::Result;
use crate::metadata::StructDescriptor;
use crate::naming::SlotTypeResolver;

/// Emits the declaration blocks for the structs in scope for one feature.
pub struct FeatureEmitter<'a> {
    builder: StructDeclarationBuilder<'a>,
}

impl<'a> FeatureEmitter<'a> {
    pub fn new(classifier: &'a dyn TypeClassifier, resolver: &'a dyn SlotTypeResolver) -> Self {
        Self {
            builder: StructDeclarationBuilder::new(classifier, resolver),
        }
    }

    /// Whether the feature contributes any output for this pass. Features
    /// with no in-scope structs must not trigger file scaffolding.
    pub fn has_work(structs: &[StructDescriptor]) -> bool {
        !structs.is_empty()
    }

    /// Concatenates one declaration block per struct, in the supplied
    /// order, with a single blank line between consecutive blocks and no
    /// leading separator before the first.
    pub fn emit(&self, feature: &str, structs: &[StructDescriptor]) -> Result<String> {
        let mut body = String::new();

        for (index, desc) in structs.iter().enumerate() {
            body.push_str(&self.builder.build(feature, desc, index == 0)?);
        }

        Ok(body)
    }
}
