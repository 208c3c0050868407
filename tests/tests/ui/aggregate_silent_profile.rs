// One profile without metadata fails the whole incident field.

use simmeta_kernel::{ProvidesMetadata, aggregate};
use simmeta_testing::UnitProfile;

#[derive(ProvidesMetadata)]
struct Silent;

fn main() {
    let _ = aggregate::<(UnitProfile, UnitProfile, Silent, UnitProfile, UnitProfile, UnitProfile)>();
}
