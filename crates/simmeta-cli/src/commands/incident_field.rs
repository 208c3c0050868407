//! `simmeta incident-field` command implementation
//!
//! The profile count is only known once the arguments are parsed, so it is
//! checked here rather than by the compiler.

use crate::error::CliError;
use crate::output::emit;
use error_stack::ResultExt;
use simmeta_kernel::{RenderOptions, incident_field_from_files};
use std::path::PathBuf;

/// Execute the `simmeta incident-field` command
pub fn run(profiles: &[PathBuf], options: &RenderOptions) -> Result<(), CliError> {
    let document = incident_field_from_files(profiles)
        .attach("profiles are given in the order XMin XMax YMin YMax ZMin ZMax")?;
    emit(&document, options)
}
