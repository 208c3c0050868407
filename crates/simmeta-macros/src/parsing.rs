//! Parsing of `#[metadata(...)]` options.

use syn::{Attribute, DeriveInput};

/// Options collected from every `#[metadata(...)]` attribute on the item.
#[derive(Debug, Default)]
pub(crate) struct MetadataOptions {
    /// The type implements `TypeMetadata` by hand.
    pub(crate) type_level: bool,
    /// The type implements `InstanceMetadata`, by hand or through `serialize`.
    pub(crate) instance_level: bool,
    /// Generate `InstanceMetadata` from the type's `Serialize` implementation.
    pub(crate) serialize: bool,
}

impl MetadataOptions {
    pub(crate) fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let mut options = Self::default();
        for attr in input.attrs.iter().filter(|attr| is_metadata(attr)) {
            options.merge_attribute(attr)?;
        }
        Ok(options)
    }

    fn merge_attribute(&mut self, attr: &Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("type_level") {
                self.type_level = true;
            } else if meta.path.is_ident("instance_level") {
                self.instance_level = true;
            } else if meta.path.is_ident("serialize") {
                self.serialize = true;
                self.instance_level = true;
            } else {
                return Err(meta.error(
                    "unsupported metadata option, expected `type_level`, `instance_level` or `serialize`",
                ));
            }
            Ok(())
        })
    }
}

fn is_metadata(attr: &Attribute) -> bool {
    attr.path().is_ident("metadata")
}
