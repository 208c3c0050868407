// Instance-bound metadata needs a live instance.

use simmeta_kernel::{Document, InstanceMetadata, ProvidesMetadata, describe_type};

#[derive(ProvidesMetadata)]
#[metadata(instance_level)]
struct Sampled(f64);

impl InstanceMetadata for Sampled {
    fn metadata(&self) -> Document {
        self.0.into()
    }
}

fn main() {
    let _ = describe_type::<Sampled>();
}
