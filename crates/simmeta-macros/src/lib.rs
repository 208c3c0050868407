//! Derive macro for registering components with the metadata subsystem.
//!
//! # Usage
//!
//! ```ignore
//! use simmeta_kernel::{Document, TypeMetadata, ProvidesMetadata};
//!
//! /// Type-bound metadata, implemented by hand
//! #[derive(ProvidesMetadata)]
//! #[metadata(type_level)]
//! struct YeeSolver;
//!
//! impl TypeMetadata for YeeSolver {
//!     fn metadata() -> Document {
//!         serde_json::json!({ "solver": "Yee" })
//!     }
//! }
//!
//! /// Instance-bound metadata generated from `Serialize`
//! #[derive(ProvidesMetadata, serde::Serialize)]
//! #[metadata(serialize)]
//! struct Laser {
//!     wave_length_si: f64,
//! }
//!
//! /// Registered without metadata; only usable through `AllowMissing<Scratch>`
//! #[derive(ProvidesMetadata)]
//! struct Scratch;
//! ```

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod codegen;
mod parsing;

use parsing::MetadataOptions;

/// Implements `ProvidesMetadata`.
///
/// Options (`#[metadata(...)]`, repeatable):
/// - `type_level`: the type implements `TypeMetadata`
/// - `instance_level`: the type implements `InstanceMetadata`
/// - `serialize`: generate `InstanceMetadata` from `serde::Serialize`
#[proc_macro_derive(ProvidesMetadata, attributes(metadata))]
pub fn derive_provides_metadata(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match MetadataOptions::from_input(&input) {
        Ok(options) => codegen::generate_registration(&input, &options).into(),
        Err(e) => e.to_compile_error().into(),
    }
}
