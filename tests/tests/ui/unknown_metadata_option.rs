// Only `type_level`, `instance_level` and `serialize` are accepted.

use simmeta_kernel::ProvidesMetadata;

#[derive(ProvidesMetadata)]
#[metadata(runtime)]
struct Wrong;

fn main() {}
