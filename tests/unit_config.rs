// tests/unit_config.rs
use std::fs;

use seeker_core::config::{Config, LayoutConfig, RecommendConfig, CONFIG_FILE};
use seeker_core::SeekerError;

#[test]
fn test_defaults() {
    let c = Config::new();
    assert_eq!(c.search.page_size, 12);
    assert_eq!(c.recommend.limit, 6);
    assert!((c.viewport.min_scale - 0.5).abs() < f64::EPSILON);
    assert!((c.viewport.max_scale - 2.0).abs() < f64::EPSILON);
    assert!(c.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let mut c = Config::new();
    c.parse_toml("[recommend]\nlimit = 3\n\n[layout]\nlink_distance = 120.0")
        .unwrap();

    assert_eq!(c.recommend.limit, 3);
    assert!((c.recommend.one_way_factor - RecommendConfig::default().one_way_factor).abs() < 1e-12);
    assert!((c.layout.link_distance - 120.0).abs() < 1e-12);
    assert!((c.layout.alpha_decay - LayoutConfig::default().alpha_decay).abs() < 1e-12);
}

#[test]
fn test_load_from_file() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join(CONFIG_FILE);
    fs::write(&path, "[search]\npage_size = 20").unwrap();

    let c = Config::load_from(&path).unwrap();
    assert_eq!(c.search.page_size, 20);
}

#[test]
fn test_missing_file_means_defaults() {
    let d = tempfile::tempdir().unwrap();
    let c = Config::load_from(&d.path().join(CONFIG_FILE)).unwrap();
    assert_eq!(c.search.page_size, 12);
}

#[test]
fn test_malformed_toml_is_an_error() {
    let mut c = Config::new();
    let err = c.parse_toml("[search\npage_size = ").unwrap_err();
    assert!(matches!(err, SeekerError::Toml(_)));
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join(CONFIG_FILE);
    fs::write(&path, "[viewport]\nmin_scale = 3.0\nmax_scale = 2.0").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, SeekerError::InvalidConfig(_)));
}

#[test]
fn test_zero_page_size_rejected() {
    let mut c = Config::new();
    c.search.page_size = 0;
    assert!(matches!(c.validate(), Err(SeekerError::InvalidConfig(_))));
}

#[test]
fn test_save_then_load() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join(CONFIG_FILE);
    let mut c = Config::new();
    c.recommend.limit = 9;
    c.layout.charge_strength = -300.0;

    c.save(&path).unwrap();
    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.recommend.limit, 9);
    assert!((loaded.layout.charge_strength + 300.0).abs() < 1e-9);
}

#[test]
fn test_negative_or_nan_weights_rejected() {
    let mut c = Config::new();
    c.recommend.topic_weight = -1.0;
    assert!(matches!(c.validate(), Err(SeekerError::InvalidConfig(_))));

    let mut c = Config::new();
    c.recommend.edge_weight = f64::NAN;
    assert!(matches!(c.validate(), Err(SeekerError::InvalidConfig(_))));
}

#[test]
fn test_layout_that_cannot_cool_rejected() {
    for toml in [
        "[layout]\nalpha_min = 0.0",
        "[layout]\nenergy_threshold = -0.5",
        "[layout]\nreheat_alpha = 0.0",
    ] {
        let mut c = Config::new();
        c.parse_toml(toml).unwrap();
        assert!(
            matches!(c.validate(), Err(SeekerError::InvalidConfig(_))),
            "{toml} accepted"
        );
    }
}
