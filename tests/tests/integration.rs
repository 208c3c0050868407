use serde_json::json;
use simmeta_kernel::config::ReportConfig;
use simmeta_kernel::distribution::GaussianBunchDistribution;
use simmeta_kernel::{
    AllowMissing, Document, Float3, IncidentFieldPolicy, RenderFormat, StrategyKind, Vector,
    aggregate, describe, describe_allow_missing, describe_type, has_instance_metadata,
    has_type_metadata, merged, render, to_sequence,
};
use simmeta_testing::{
    CountingComponent, DualComponent, LaserPulse, Polarization, ShiftedProfile, SilentComponent,
    Tabulated, UnitProfile, assert_strategy,
};

type Units = (
    UnitProfile,
    UnitProfile,
    UnitProfile,
    UnitProfile,
    UnitProfile,
    UnitProfile,
);

#[test]
fn instance_only_component_is_described_through_its_instance() {
    let component = CountingComponent::new("ionization");

    assert_eq!(describe(&component), json!({ "label": "ionization" }));
    assert_eq!(component.calls(), 1);
    assert_strategy!(CountingComponent, StrategyKind::InstanceBound);
}

#[test]
fn type_only_component_needs_no_instance() {
    assert_eq!(describe_type::<UnitProfile>(), json!({ "x": 1 }));
    assert_eq!(describe(&UnitProfile), json!({ "x": 1 }));
    assert_strategy!(UnitProfile, StrategyKind::TypeBound);
}

#[test]
fn type_bound_wins_and_instance_operation_never_runs() {
    let component = DualComponent::default();

    assert_eq!(describe(&component), json!({ "source": "type" }));
    assert_eq!(describe_type::<DualComponent>(), json!({ "source": "type" }));
    assert_eq!(describe_allow_missing(&component), json!({ "source": "type" }));
    assert_eq!(component.instance_calls(), 0);
}

#[test]
fn missing_metadata_is_empty_under_allow_missing() {
    assert_eq!(describe_type::<AllowMissing<SilentComponent>>(), json!({}));
    assert_eq!(describe_allow_missing(&SilentComponent), json!({}));
    assert_strategy!(SilentComponent, StrategyKind::Missing);
    assert_strategy!(AllowMissing<SilentComponent>, StrategyKind::Missing);
}

#[test]
fn allow_missing_leaves_available_metadata_untouched() {
    let component = CountingComponent::new("probe");

    assert_eq!(describe_allow_missing(&component), describe(&component));
    assert_eq!(describe_type::<AllowMissing<UnitProfile>>(), json!({ "x": 1 }));
}

#[test]
fn capabilities_follow_registration() {
    assert!(has_instance_metadata::<CountingComponent>());
    assert!(!has_type_metadata::<CountingComponent>());
    assert!(has_type_metadata::<DualComponent>());
    assert!(!has_type_metadata::<SilentComponent>());
    assert!(!has_instance_metadata::<SilentComponent>());
}

#[test]
fn six_identical_profiles() {
    let expected = json!({
        "incidentField": {
            "XMin": { "x": 1 }, "XMax": { "x": 1 },
            "YMin": { "x": 1 }, "YMax": { "x": 1 },
            "ZMin": { "x": 1 }, "ZMax": { "x": 1 }
        }
    });

    assert_eq!(aggregate::<Units>(), expected);
    assert_eq!(describe_type::<IncidentFieldPolicy<Units>>(), expected);
}

#[test]
fn swapping_profiles_swaps_their_boundaries() {
    let doc = aggregate::<(
        UnitProfile,
        UnitProfile,
        ShiftedProfile,
        UnitProfile,
        UnitProfile,
        UnitProfile,
    )>();
    let swapped = aggregate::<(
        UnitProfile,
        UnitProfile,
        UnitProfile,
        ShiftedProfile,
        UnitProfile,
        UnitProfile,
    )>();

    assert_eq!(doc["incidentField"]["YMin"], json!({ "y": 2 }));
    assert_eq!(doc["incidentField"]["YMax"], json!({ "x": 1 }));
    assert_eq!(swapped["incidentField"]["YMin"], json!({ "x": 1 }));
    assert_eq!(swapped["incidentField"]["YMax"], json!({ "y": 2 }));
    assert_ne!(doc, swapped);
}

#[test]
fn profile_without_metadata_under_allow_missing() {
    let doc = aggregate::<(
        AllowMissing<SilentComponent>,
        UnitProfile,
        UnitProfile,
        UnitProfile,
        UnitProfile,
        UnitProfile,
    )>();

    assert_eq!(doc["incidentField"]["XMin"], json!({}));
    assert_eq!(doc["incidentField"]["ZMax"], json!({ "x": 1 }));
}

#[test]
fn merge_patch_is_idempotent() {
    let base = json!({ "solver": { "name": "Yee", "order": 2 }, "steps": 100 });
    let patch = json!({ "solver": { "order": 4, "cfl": null }, "tags": ["a"] });

    let once = merged(base, &patch);
    let twice = merged(once.clone(), &patch);

    assert_eq!(once, twice);
    assert_eq!(
        once,
        json!({ "solver": { "name": "Yee", "order": 4, "cfl": null }, "steps": 100, "tags": ["a"] })
    );
}

#[test]
fn vectors_flatten_in_index_order() {
    assert_eq!(to_sequence(&Vector::new([1, 2, 3])), vec![1, 2, 3]);
    assert_eq!(to_sequence(&Vector::new([7.5])), vec![7.5]);
    assert_eq!(to_sequence(&Vector::new([4u8, 3, 2, 1])), vec![4, 3, 2, 1]);
    assert_eq!(Document::from(Float3::new([0.0, 1.0, 2.0])), json!([0.0, 1.0, 2.0]));
}

#[test]
fn serialized_component_metadata() {
    let pulse = LaserPulse {
        wave_length_si: 8.0e-7,
        pulse_duration_si: 3.0e-14,
        polarization: Polarization::Circular,
    };

    assert_eq!(
        describe(&pulse),
        json!({
            "waveLengthSi": 8.0e-7,
            "pulseDurationSi": 3.0e-14,
            "polarization": "circular"
        })
    );
    assert_strategy!(LaserPulse, StrategyKind::InstanceBound);
}

#[test]
fn generic_serialized_component_metadata() {
    let table = Tabulated {
        name: "density",
        samples: vec![1u32, 2, 3],
    };

    assert_eq!(
        describe(&table),
        json!({ "name": "density", "samples": [1, 2, 3] })
    );
}

#[test]
fn gaussian_bunch_is_instance_bound() {
    let bunch = GaussianBunchDistribution::new(1.0e9, 2.0e-6, Float3::new([0.0, 1.0e-5, 0.0]));
    let doc = describe(&bunch);

    assert_eq!(doc["type"], json!("gaussianBunch"));
    assert_eq!(doc["centroidPositionSi"], json!([0.0, 1.0e-5, 0.0]));
    assert_eq!(doc["drift"], Document::Null);
    assert!(doc["maxDensitySi"].as_f64().unwrap() > 0.0);
}

#[test]
fn configured_rendering_of_an_aggregate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.yaml");
    std::fs::write(&path, "render:\n  format: yaml\n").unwrap();

    let config = ReportConfig::load(&path).unwrap();
    assert_eq!(config.render.format, RenderFormat::Yaml);

    let text = render(&aggregate::<Units>(), &config.render).unwrap();
    assert!(text.starts_with("incidentField:"));
    assert!(text.contains("XMin:"));
}
