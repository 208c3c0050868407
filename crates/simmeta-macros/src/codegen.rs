//! Code generation for metadata registration.

use crate::parsing::MetadataOptions;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_quote};

fn capability(present: bool) -> TokenStream {
    if present {
        quote!(::simmeta_kernel::Provided)
    } else {
        quote!(::simmeta_kernel::Absent)
    }
}

/// `impl ProvidesMetadata`, plus `impl InstanceMetadata` for `serialize`.
pub(crate) fn generate_registration(input: &DeriveInput, options: &MetadataOptions) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let type_level = capability(options.type_level);
    let instance_level = capability(options.instance_level);

    let registration = quote! {
        impl #impl_generics ::simmeta_kernel::ProvidesMetadata for #name #ty_generics #where_clause {
            type TypeLevel = #type_level;
            type InstanceLevel = #instance_level;
            type Subject = Self;
        }
    };

    if !options.serialize {
        return registration;
    }

    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(#name #ty_generics: ::simmeta_kernel::__private::serde::Serialize));
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    quote! {
        #registration

        impl #impl_generics ::simmeta_kernel::InstanceMetadata for #name #ty_generics #where_clause {
            fn metadata(&self) -> ::simmeta_kernel::Document {
                ::simmeta_kernel::to_document(self)
            }
        }
    }
}
