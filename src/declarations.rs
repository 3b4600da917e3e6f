//! Per-struct declaration records and their textual rendering.
//!
//! Classification runs first and produces an ordered record of slot fields;
//! rendering the record to C++ text is a separate step. The record form is
//! what the unit tests assert against, so the decision logic stays testable
//! without string comparison.

use crate::classifier::{self, TypeClassifier, EXTENSION_CHAIN_SLOT_TYPE};
use crate::errors::{Error, Result};
use crate::metadata::StructDescriptor;
use crate::naming::SlotTypeResolver;

/// One decoded slot field of a wrapper declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotField {
    /// The owning link heading the polymorphic extension chain.
    ExtensionChain { name: String },
    /// A decoded slot typed by the naming collaborator.
    Decoded { name: String, type_name: String },
}

/// The decoded wrapper declaration for one struct.
///
/// The rendered form always carries exactly one `struct_type` alias and one
/// null-initialized pointer to the original struct; `fields` holds only the
/// decoded slots, in original member order. Members that need no slot leave
/// no trace here, since the decode pass looks slots up by member name, not
/// by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedStructDeclaration {
    pub struct_name: String,
    pub fields: Vec<SlotField>,
}

impl DecodedStructDeclaration {
    /// Renders the declaration block. A separating blank line precedes the
    /// block unless it is the first of its file section.
    pub fn render(&self, is_first: bool) -> String {
        let mut body = String::new();

        if !is_first {
            body.push('\n');
        }

        body.push_str(&format!("struct Decoded_{}\n", self.struct_name));
        body.push_str("{\n");
        body.push_str(&format!("    using struct_type = {};\n", self.struct_name));
        body.push('\n');
        // Null-initialized so the decode pass can test for presence before
        // dereferencing.
        body.push_str(&format!("    {}* value{{ nullptr }};\n", self.struct_name));

        if !self.fields.is_empty() {
            body.push('\n');

            for field in &self.fields {
                match field {
                    SlotField::ExtensionChain { name } => {
                        body.push_str(&format!("    {} {};\n", EXTENSION_CHAIN_SLOT_TYPE, name));
                    }
                    SlotField::Decoded { name, type_name } => {
                        body.push_str(&format!("    {} {};\n", type_name, name));
                    }
                }
            }
        }

        body.push_str("};\n");

        body
    }
}

/// Builds decoded wrapper declarations from struct metadata.
pub struct StructDeclarationBuilder<'a> {
    classifier: &'a dyn TypeClassifier,
    resolver: &'a dyn SlotTypeResolver,
}

impl<'a> StructDeclarationBuilder<'a> {
    pub fn new(classifier: &'a dyn TypeClassifier, resolver: &'a dyn SlotTypeResolver) -> Self {
        Self {
            classifier,
            resolver,
        }
    }

    /// Classifies every member of `desc` and returns the declaration
    /// record. A member whose base type cannot be classified, or whose slot
    /// type cannot be named, invalidates the whole struct's declaration;
    /// the error carries the feature, struct and member names so the
    /// offending metadata entry can be located.
    pub fn declaration(
        &self,
        feature: &str,
        desc: &StructDescriptor,
    ) -> Result<DecodedStructDeclaration> {
        let mut fields = Vec::new();

        for member in &desc.members {
            if classifier::is_extension_chain(member) {
                // The chain's concrete type is resolved per instance at
                // decode time, so it bypasses the slot naming grammar.
                fields.push(SlotField::ExtensionChain {
                    name: member.name.clone(),
                });
                continue;
            }

            let kind = self.classifier.classify(&member.base_type).ok_or_else(|| {
                Error::UnclassifiedBaseType {
                    feature: feature.to_string(),
                    structure: desc.name.clone(),
                    member: member.name.clone(),
                    base_type: member.base_type.clone(),
                }
            })?;

            if !classifier::needs_slot(member, kind) {
                continue;
            }

            let type_name = self
                .resolver
                .slot_type(&member.base_type, member.is_pointer, member.is_array)
                .ok_or_else(|| Error::UnresolvedSlotType {
                    feature: feature.to_string(),
                    structure: desc.name.clone(),
                    member: member.name.clone(),
                    base_type: member.base_type.clone(),
                })?;

            fields.push(SlotField::Decoded {
                name: member.name.clone(),
                type_name,
            });
        }

        Ok(DecodedStructDeclaration {
            struct_name: desc.name.clone(),
            fields,
        })
    }

    /// Builds and renders the declaration in one step.
    pub fn build(&self, feature: &str, desc: &StructDescriptor, is_first: bool) -> Result<String> {
        Ok(self.declaration(feature, desc)?.render(is_first))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::TypeKind;
    use crate::metadata::MemberDescriptor;

    /// Fixed-table collaborators, so these tests do not depend on the
    /// snapshot registry or the toolchain naming grammar.
    struct FakeTypes;

    impl TypeClassifier for FakeTypes {
        fn classify(&self, base_type: &str) -> Option<TypeKind> {
            match base_type {
                "VkExtent3D" | "VkApplicationInfo" => Some(TypeKind::Struct),
                "VkDevice" => Some(TypeKind::Handle),
                "PFN_vkVoidFunction" => Some(TypeKind::FunctionPointer),
                "void" | "char" | "uint32_t" | "float" | "VkStructureType" => {
                    Some(TypeKind::Plain)
                }
                _ => None,
            }
        }
    }

    impl SlotTypeResolver for FakeTypes {
        fn slot_type(&self, base_type: &str, _: bool, _: bool) -> Option<String> {
            self.classify(base_type)
                .map(|_| format!("Decoder<{}>", base_type))
        }
    }

    fn member(name: &str, base_type: &str, is_pointer: bool, is_array: bool) -> MemberDescriptor {
        MemberDescriptor {
            name: name.to_string(),
            base_type: base_type.to_string(),
            is_pointer,
            is_array,
        }
    }

    fn builder(fake: &FakeTypes) -> StructDeclarationBuilder<'_> {
        StructDeclarationBuilder::new(fake, fake)
    }

    #[test]
    fn test_all_plain_struct_keeps_only_alias_and_value() {
        let fake = FakeTypes;
        let desc = StructDescriptor {
            name: "VkExtent2D".to_string(),
            members: vec![
                member("width", "uint32_t", false, false),
                member("height", "uint32_t", false, false),
            ],
        };

        let decl = builder(&fake).declaration("VK_VERSION_1_0", &desc).unwrap();
        assert!(decl.fields.is_empty());

        let text = decl.render(true);
        assert_eq!(
            text,
            "struct Decoded_VkExtent2D\n\
             {\n\
             \x20   using struct_type = VkExtent2D;\n\
             \n\
             \x20   VkExtent2D* value{ nullptr };\n\
             };\n"
        );
    }

    #[test]
    fn test_extension_chain_beats_classifier() {
        let fake = FakeTypes;
        // A pNext deliberately declared with a handle's shape: plain value,
        // no pointer, no array. The name alone must force the owning link.
        let desc = StructDescriptor {
            name: "VkOddity".to_string(),
            members: vec![member("pNext", "VkDevice", false, false)],
        };

        let decl = builder(&fake).declaration("VK_VERSION_1_0", &desc).unwrap();
        assert_eq!(
            decl.fields,
            vec![SlotField::ExtensionChain {
                name: "pNext".to_string()
            }]
        );

        let text = decl.render(true);
        assert!(text.contains("    std::unique_ptr<PNextNode> pNext;\n"));
        assert!(!text.contains("Decoder<VkDevice>"));
    }

    #[test]
    fn test_emitted_fields_keep_declaration_order() {
        let fake = FakeTypes;
        let desc = StructDescriptor {
            name: "VkSample".to_string(),
            members: vec![
                member("sType", "VkStructureType", false, false),
                member("pCount", "uint32_t", true, false),
                member("flags", "uint32_t", false, false),
                member("regions", "VkExtent3D", false, true),
            ],
        };

        let decl = builder(&fake).declaration("VK_VERSION_1_0", &desc).unwrap();
        assert_eq!(
            decl.fields,
            vec![
                SlotField::Decoded {
                    name: "pCount".to_string(),
                    type_name: "Decoder<uint32_t>".to_string()
                },
                SlotField::Decoded {
                    name: "regions".to_string(),
                    type_name: "Decoder<VkExtent3D>".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let fake = FakeTypes;
        let desc = StructDescriptor {
            name: "VkSample".to_string(),
            members: vec![
                member("pNext", "void", true, false),
                member("device", "VkDevice", false, false),
            ],
        };

        let b = builder(&fake);
        let first = b.build("VK_VERSION_1_0", &desc, false).unwrap();
        let second = b.build("VK_VERSION_1_0", &desc, false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unclassified_base_type_aborts_struct() {
        let fake = FakeTypes;
        let desc = StructDescriptor {
            name: "VkBroken".to_string(),
            members: vec![member("handle", "VkMystery", false, false)],
        };

        let err = builder(&fake)
            .declaration("VK_EXT_broken", &desc)
            .unwrap_err();
        match err {
            Error::UnclassifiedBaseType {
                feature,
                structure,
                member,
                base_type,
            } => {
                assert_eq!(feature, "VK_EXT_broken");
                assert_eq!(structure, "VkBroken");
                assert_eq!(member, "handle");
                assert_eq!(base_type, "VkMystery");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unresolved_slot_type_aborts_struct() {
        struct NamelessResolver;

        impl SlotTypeResolver for NamelessResolver {
            fn slot_type(&self, _: &str, _: bool, _: bool) -> Option<String> {
                None
            }
        }

        let fake = FakeTypes;
        let resolver = NamelessResolver;
        let desc = StructDescriptor {
            name: "VkSample".to_string(),
            members: vec![member("pCount", "uint32_t", true, false)],
        };

        let err = StructDeclarationBuilder::new(&fake, &resolver)
            .declaration("VK_VERSION_1_0", &desc)
            .unwrap_err();
        assert!(matches!(err, Error::UnresolvedSlotType { .. }));
    }
}
