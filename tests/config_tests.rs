// Configuration validation and scene descriptor parsing.

use glam::Vec3;
use showcase_core::*;
use std::f32::consts::{FRAC_PI_2, PI};

#[test]
fn defaults_are_valid() {
    assert_eq!(ShowcaseConfig::default().validate(), Ok(()));
    assert_eq!(ShowcaseConfig::orbit().validate(), Ok(()));
    assert!(matches!(
        ShowcaseConfig::default().camera,
        CameraConfig::FirstPerson(_)
    ));
    assert!(matches!(ShowcaseConfig::orbit().camera, CameraConfig::Orbit(_)));
}

#[test]
fn smoothing_factors_must_be_in_unit_interval() {
    for bad in [0.0, -0.1, 1.5, f32::NAN] {
        let mut cfg = ShowcaseConfig::default();
        cfg.interaction.scale_smoothing = bad;
        assert!(
            matches!(cfg.validate(), Err(ConfigError::FactorOutOfRange { name: "scale_smoothing", .. })),
            "accepted {}",
            bad
        );
    }
    let mut cfg = ShowcaseConfig::default();
    cfg.interaction.scale_smoothing = 1.0;
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn multipliers_never_shrink_objects() {
    for bad in [f32::NAN, 0.0, 0.9] {
        let mut cfg = ShowcaseConfig::default();
        cfg.interaction.hover_multiplier = bad;
        assert!(
            matches!(cfg.validate(), Err(ConfigError::MultiplierBelowOne { name: "hover_multiplier", .. })),
            "accepted {}",
            bad
        );
    }
    let mut cfg = ShowcaseConfig::default();
    cfg.interaction.click_multiplier = 0.5;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::MultiplierBelowOne { name: "click_multiplier", .. })
    ));

    let mut cfg = ShowcaseConfig::default();
    cfg.interaction.hover_multiplier = 1.0;
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn empty_ranges_are_rejected() {
    let mut cfg = ShowcaseConfig::orbit();
    if let CameraConfig::Orbit(o) = &mut cfg.camera {
        o.min_radius = 50.0;
    }
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::EmptyRange { name: "radius", .. })
    ));

    let mut cfg = ShowcaseConfig::default();
    cfg.projection.zfar = 0.01;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::EmptyRange { name: "depth", .. })
    ));
}

#[test]
fn pitch_limits_must_stay_inside_vertical() {
    let mut cfg = ShowcaseConfig::default();
    if let CameraConfig::FirstPerson(fp) = &mut cfg.camera {
        fp.max_pitch = FRAC_PI_2;
    }
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::PitchOutOfRange { .. })
    ));
}

#[test]
fn orbit_polar_limits_must_stay_off_the_vertical_axis() {
    for (min, max) in [(0.0, 1.2), (-0.3, 1.2), (0.15, PI), (0.15, 4.0)] {
        let mut cfg = ShowcaseConfig::orbit();
        if let CameraConfig::Orbit(o) = &mut cfg.camera {
            o.min_phi = min;
            o.max_phi = max;
            o.start_phi = min.max(0.0);
        }
        assert!(
            matches!(cfg.validate(), Err(ConfigError::PolarOutOfRange { .. })),
            "accepted [{}, {}]",
            min,
            max
        );
        assert!(Showcase::new(cfg, PickableRegistry::default_layout()).is_err());
    }
}

#[test]
fn accepted_orbit_limits_keep_the_camera_finite() {
    let mut cfg = ShowcaseConfig::orbit();
    if let CameraConfig::Orbit(o) = &mut cfg.camera {
        o.min_phi = 1e-3;
        o.max_phi = PI - 1e-3;
        o.start_phi = o.min_phi;
    }
    assert_eq!(cfg.validate(), Ok(()));
    let mut s = Showcase::new(
        cfg,
        PickableRegistry::new([ObjectSpec::new(ObjectKind::Sphere, Vec3::new(0.0, 1.5, 0.0))]),
    )
    .unwrap();
    s.set_viewport(800.0, 600.0);
    s.tick(0.016, &mut NullRenderer);
    assert!(s.camera().view_projection().is_finite());
    assert!(s.pick_at(400.0, 300.0).is_some());
}

struct NullRenderer;

impl SceneRenderer for NullRenderer {
    fn render(&mut self, _scene: &PickableRegistry, _camera: &Camera) {}
}

#[test]
fn spec_builder_ignores_invalid_scales() {
    let spec = ObjectSpec::new(ObjectKind::Cube, Vec3::ZERO).with_scale(2.0);
    assert_eq!(spec.base_scale, 2.0);
    for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        assert_eq!(spec.clone().with_scale(bad).base_scale, 2.0, "took {}", bad);
    }
}

#[test]
fn config_errors_render_readable_messages() {
    let err = ConfigError::NonPositive {
        name: "zoom_speed",
        value: -1.0,
    };
    assert_eq!(err.to_string(), "zoom_speed must be finite and positive, got -1");
}

#[test]
fn vectors_parse_with_spaces_or_commas() {
    assert_eq!(parse_vec3("1 2 3"), Ok(Vec3::new(1.0, 2.0, 3.0)));
    assert_eq!(parse_vec3("-9,2,0"), Ok(Vec3::new(-9.0, 2.0, 0.0)));
    assert_eq!(parse_vec3(" 0.5,  1.5  -2 "), Ok(Vec3::new(0.5, 1.5, -2.0)));
    for bad in ["1 2", "1 2 3 4", "a b c", "1 2 NaN", ""] {
        assert!(matches!(parse_vec3(bad), Err(SceneError::BadVector(_))), "accepted '{}'", bad);
    }
}

#[test]
fn kinds_parse_case_insensitively() {
    assert_eq!(" Cube ".parse::<ObjectKind>(), Ok(ObjectKind::Cube));
    assert_eq!("BUILDING".parse::<ObjectKind>(), Ok(ObjectKind::Building));
    assert_eq!(
        "teapot".parse::<ObjectKind>(),
        Err(SceneError::UnknownKind("teapot".to_string()))
    );
    for kind in ObjectKind::ALL {
        assert_eq!(kind.name().parse::<ObjectKind>(), Ok(kind));
    }
}

#[test]
fn specs_build_from_element_attributes() {
    let spec = ObjectSpec::from_attributes(
        "sphere",
        Some("-3 2 0"),
        Some("1.5"),
        Some(" https://example.org "),
        Some("   "),
    )
    .expect("valid attributes");
    assert_eq!(spec.kind, ObjectKind::Sphere);
    assert_eq!(spec.position, Vec3::new(-3.0, 2.0, 0.0));
    assert_eq!(spec.base_scale, 1.5);
    assert_eq!(spec.url.as_deref(), Some("https://example.org"));
    assert_eq!(spec.message, None);

    let bare = ObjectSpec::from_attributes("cube", None, None, None, None).expect("valid");
    assert_eq!(bare.position, Vec3::ZERO);
    assert_eq!(bare.base_scale, 1.0);

    assert!(matches!(
        ObjectSpec::from_attributes("cube", None, Some("-1"), None, None),
        Err(SceneError::BadScale(_))
    ));
    assert!(matches!(
        ObjectSpec::from_attributes("cube", Some("1 2"), None, None, None),
        Err(SceneError::BadVector(_))
    ));
}

#[test]
fn registry_hands_out_stable_ids() {
    let reg = PickableRegistry::default_layout();
    assert_eq!(reg.len(), 4);
    let ids: Vec<ObjectId> = reg.ids().collect();
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(id.index(), i);
        assert_eq!(reg.get(*id).map(|o| o.id), Some(*id));
    }
    for kind in [
        ObjectKind::Cube,
        ObjectKind::Sphere,
        ObjectKind::Cylinder,
        ObjectKind::Building,
    ] {
        assert!(reg.first_of_kind(kind).is_some(), "missing {}", kind.name());
    }
    assert_eq!(reg.first_of_kind(ObjectKind::Plane), None);
    assert!(PickableRegistry::default().is_empty());
}

#[test]
fn new_objects_start_at_rest() {
    let reg = PickableRegistry::new([ObjectSpec::new(ObjectKind::Cube, Vec3::ONE).with_scale(2.0)]);
    let o = reg.iter().next().expect("one object");
    assert_eq!(o.scale(), 2.0);
    assert_eq!(o.target_scale, 2.0);
    assert_eq!(o.transform.position, Vec3::ONE);
    assert_eq!(o.display_color(), ObjectKind::Cube.default_color());
}
