use pin_core::*;

fn config(distribution: FieldDistribution) -> PinConfig {
    PinConfig {
        distribution,
        star_count: 300,
        ..PinConfig::default()
    }
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    for dist in [FieldDistribution::RandomVolume, FieldDistribution::FibonacciSphere] {
        let mut la = ResourceLedger::new();
        let mut lb = ResourceLedger::new();
        let a = PointField::generate(&config(dist), &mut la);
        let b = PointField::generate(&config(dist), &mut lb);
        assert_eq!(a.len(), 300);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.position(), y.position());
            assert_eq!(x.base, y.base);
            assert_eq!(x.phase, y.phase);
        }
    }
}

#[test]
fn different_seeds_give_different_fields() {
    let mut ledger = ResourceLedger::new();
    let a = PointField::generate(&config(FieldDistribution::RandomVolume), &mut ledger);
    let other = PinConfig {
        seed: 7,
        ..config(FieldDistribution::RandomVolume)
    };
    let b = PointField::generate(&other, &mut ledger);
    assert!(a.iter().zip(b.iter()).any(|(x, y)| x.position() != y.position()));
}

#[test]
fn stars_stay_inside_the_field_sphere() {
    for dist in [FieldDistribution::RandomVolume, FieldDistribution::FibonacciSphere] {
        let cfg = config(dist);
        let mut ledger = ResourceLedger::new();
        let field = PointField::generate(&cfg, &mut ledger);
        for e in field.iter() {
            assert!(e.position().length() <= cfg.field_radius + 1e-3);
        }
    }
}

#[test]
fn fresh_stars_are_selectable_with_sane_visuals() {
    let cfg = config(FieldDistribution::FibonacciSphere);
    let mut ledger = ResourceLedger::new();
    let field = PointField::generate(&cfg, &mut ledger);
    for (i, e) in field.iter().enumerate() {
        assert_eq!(e.id, EntityId(i as u32));
        assert!(e.selectable && !e.selected);
        assert!(e.base.color.iter().all(|c| (0.0..=1.0).contains(c)));
        assert!(e.base.opacity >= BASE_OPACITY_MIN && e.base.opacity <= 1.0);
        assert!((e.base.scale - 1.0).abs() <= BASE_SCALE_JITTER / 2.0 + 1e-6);
        assert!(e.phase >= 0.0 && e.phase <= std::f32::consts::TAU);
        assert_eq!(e.visual, e.base);
    }
    assert_eq!(ledger.live_of(ResourceKind::Star), 300);
}

#[test]
fn palette_is_mostly_blue_cyan() {
    let cfg = config(FieldDistribution::RandomVolume);
    let mut ledger = ResourceLedger::new();
    let field = PointField::generate(&cfg, &mut ledger);
    let cool = field
        .iter()
        .filter(|e| e.base.color[2] >= e.base.color[0])
        .count();
    assert!(cool * 10 >= field.len() * 8, "only {cool} cool stars");
}

#[test]
fn dispose_releases_every_star() {
    let mut ledger = ResourceLedger::new();
    let mut field = PointField::generate(&config(FieldDistribution::RandomVolume), &mut ledger);
    field.dispose(&mut ledger);
    assert!(field.is_empty());
    assert_eq!(ledger.live_count(), 0);
    assert_eq!(ledger.drain_released().len(), 300);
}

#[test]
fn config_validation_rejects_bad_values() {
    assert_eq!(PinConfig::default().validate(), Ok(()));

    let cfg = PinConfig {
        star_count: 0,
        ..PinConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::NoStars));

    let cfg = PinConfig {
        pin_length: 0,
        ..PinConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::EmptyPin));

    let mut cfg = PinConfig::default();
    cfg.camera.min_radius = 20.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::RadiusBand { .. })));

    let mut cfg = PinConfig::default();
    cfg.camera.polar_epsilon = 2.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::PolarEpsilon(_))));

    let cfg = PinConfig {
        flash_duration_sec: 0.0,
        ..PinConfig::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonPositive { name: "flash_duration_sec", .. })
    ));
    assert!(ConstellationPin::new(cfg).is_err());
}

#[test]
fn palettes_differ() {
    assert_ne!(Palette::aurora(), Palette::ember());
    assert_eq!(Palette::default(), Palette::aurora());
}
