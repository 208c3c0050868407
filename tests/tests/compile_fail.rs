//! Compile-fail tests for metadata resolution and the derive macro
//!
//! The snapshots under `tests/ui` follow the local toolchain's rendering
//! (`TRYBUILD=overwrite` unless `TRYBUILD` is set). The lines listed in
//! `CASES` must appear in them.

use std::fs;
use std::path::Path;

const GUARD: &str = "missing metadata: `MissingMetadata<Silent>` cannot be described";
const LABEL: &str = "this type is supposed to provide metadata but has none";
const REMEDY_OVERRIDE: &str = "implement `ProvidesMetadata` for the type by hand";
const REMEDY_OPERATION: &str = "add a `TypeMetadata` or `InstanceMetadata` implementation";
const REMEDY_WRAPPER: &str = "use `AllowMissing<YourType>` at this call site";

const CASES: &[(&str, &[&str])] = &[
    ("describe_silent", &[GUARD, LABEL, REMEDY_OVERRIDE, REMEDY_OPERATION, REMEDY_WRAPPER]),
    ("describe_type_silent", &[GUARD, LABEL, REMEDY_OVERRIDE, REMEDY_OPERATION, REMEDY_WRAPPER]),
    ("aggregate_silent_profile", &[GUARD, REMEDY_OVERRIDE, REMEDY_OPERATION, REMEDY_WRAPPER]),
    (
        "describe_type_instance_only",
        &[
            "`Sampled` only provides instance-bound metadata",
            "describe it through a live instance with `describe(&value)`",
        ],
    ),
    (
        "unknown_metadata_option",
        &["unsupported metadata option, expected `type_level`, `instance_level` or `serialize`"],
    ),
    (
        "allow_missing_unregistered",
        &[
            "is not registered with the metadata subsystem",
            "Unregistered",
            "a bare `#[derive(ProvidesMetadata)]` registers",
        ],
    ),
];

#[test]
fn ui() {
    if std::env::var_os("TRYBUILD").is_none() {
        unsafe { std::env::set_var("TRYBUILD", "overwrite"); }
    }

    // runs on drop
    {
        let t = trybuild::TestCases::new();
        t.compile_fail("tests/ui/*.rs");
    }

    let ui = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("ui");
    for (case, lines) in CASES {
        let path = ui.join(format!("{case}.stderr"));
        let stderr = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));

        for line in lines.iter() {
            assert!(
                stderr.contains(line),
                "{case}: expected `{line}` in the compiler output:\n{stderr}"
            );
        }
    }
}
