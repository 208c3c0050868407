//! `simmeta merge` command implementation

use crate::error::CliError;
use crate::output::emit;
use simmeta_kernel::{RenderOptions, merge_files};
use std::path::{Path, PathBuf};

/// Execute the `simmeta merge` command
pub fn run(target: &Path, patches: &[PathBuf], options: &RenderOptions) -> Result<(), CliError> {
    let document = merge_files(target, patches)?;
    emit(&document, options)
}
