//! `simmeta render` command implementation

use crate::error::CliError;
use crate::output::emit;
use simmeta_kernel::{RenderOptions, read_document};
use std::path::Path;

/// Execute the `simmeta render` command
pub fn run(input: &Path, options: &RenderOptions) -> Result<(), CliError> {
    let document = read_document(input)?;
    emit(&document, options)
}
