// `AllowMissing` still needs the wrapped type to be registered.

use simmeta_kernel::{AllowMissing, describe_type};

struct Unregistered;

fn main() {
    let _ = describe_type::<AllowMissing<Unregistered>>();
}
