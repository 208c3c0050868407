// A registered type without metadata cannot be described through an instance.

use simmeta_kernel::{ProvidesMetadata, describe};

#[derive(ProvidesMetadata)]
struct Silent;

fn main() {
    let _ = describe(&Silent);
}
