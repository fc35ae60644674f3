// SPDX-License-Identifier: MPL-2.0
//! Integration tests across config persistence, localization, and the
//! rotation controller.

use beteseb::config::{self, Config};
use beteseb::error::RotationError;
use beteseb::i18n::fluent::I18n;
use beteseb::rotation::{Rotation, RotationConfig};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let amharic = Config {
        general: config::GeneralConfig {
            language: Some("am".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    config::save_to_path(&amharic, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    let i18n_am = I18n::new(None, &loaded);
    assert_eq!(i18n_am.current_locale().to_string(), "am");

    let english = Config {
        general: config::GeneralConfig {
            language: Some("en-US".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    config::save_to_path(&english, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn configured_timing_drives_the_rotation() {
    let config = Config {
        showcase: config::ShowcaseConfig {
            advance_period_ms: Some(2000),
            resume_cooldown_ms: Some(5000),
            counter_duration_ms: None,
        },
        ..Default::default()
    };

    let start = Instant::now();
    let mut rotation = Rotation::new(
        vec!["doro", "tibs", "kitfo"],
        config.showcase.rotation_config(),
        start,
    );
    assert_eq!(rotation.active_index(), Some(0));

    rotation.tick(start + Duration::from_millis(2000));
    assert_eq!(rotation.active_index(), Some(1));

    rotation.tick(start + Duration::from_millis(4000));
    assert_eq!(rotation.active_index(), Some(2));
}

#[test]
fn manual_selection_pauses_then_resumes_on_schedule() {
    let start = Instant::now();
    let mut rotation = Rotation::new(
        vec!["doro", "tibs", "kitfo"],
        RotationConfig::default(),
        start,
    );
    let at = |ms: u64| start + Duration::from_millis(ms);

    // First automatic advance.
    rotation.tick(at(4000));
    assert_eq!(rotation.active_index(), Some(1));

    // A manual selection pauses automatic advancement.
    rotation.select(2, at(4500)).expect("index in range");
    assert_eq!(rotation.active_index(), Some(2));
    assert!(!rotation.auto_advance());

    // Drive the timer at the UI cadence; nothing moves during the cooldown.
    let mut ms = 4600;
    while ms < 12500 {
        rotation.tick(at(ms));
        assert_eq!(rotation.active_index(), Some(2));
        ms += 100;
    }

    // Cooldown expires: advancement resumes but the selection holds until a
    // full period has passed.
    rotation.tick(at(12500));
    assert!(rotation.auto_advance());
    assert_eq!(rotation.active_index(), Some(2));

    while ms < 16500 {
        rotation.tick(at(ms));
        assert_eq!(rotation.active_index(), Some(2));
        ms += 100;
    }
    rotation.tick(at(16500));
    assert_eq!(rotation.active_index(), Some(0));
}

#[test]
fn out_of_range_selection_reports_the_failing_index() {
    let start = Instant::now();
    let mut rotation = Rotation::new(vec!["doro", "tibs"], RotationConfig::default(), start);

    let error = rotation
        .select(5, start + Duration::from_millis(100))
        .expect_err("selection should be rejected");

    assert_eq!(
        error,
        RotationError::InvalidIndex {
            requested: 5,
            count: 2
        }
    );
    assert_eq!(rotation.active_index(), Some(0));
    assert!(rotation.auto_advance());
}
