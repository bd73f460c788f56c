//! Config Validation Tests
//!
//! Round-trips joint_config.toml files through `load_from_file` and checks
//! that invalid calibrations are rejected at load time rather than
//! surfacing as nonsense scores later.

use std::io::Write;

use roertwin::config::{defaults, ConfigError, JointConfig};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write");
    file
}

#[test]
fn empty_file_yields_defaults() {
    let file = write_config("");
    let config = JointConfig::load_from_file(file.path()).expect("load");
    assert!(
        (config.traffic.heavy_vehicle_fraction - defaults::HEAVY_VEHICLE_FRACTION).abs()
            < f64::EPSILON
    );
    assert!((config.index.healthy_threshold - defaults::HEALTHY_THRESHOLD).abs() < f64::EPSILON);
    assert_eq!(config.noise.min_samples, defaults::NOISE_MIN_SAMPLES);
}

#[test]
fn overrides_survive_the_load() {
    let file = write_config(
        r#"
        [joint]
        name = "Roertunnel southbound joint 3"

        [traffic]
        heavy_vehicle_fraction = 0.22

        [thermal]
        freeze_threshold_c = -2.0

        [server]
        addr = "127.0.0.1:9090"
        "#,
    );
    let config = JointConfig::load_from_file(file.path()).expect("load");
    assert_eq!(config.joint.name, "Roertunnel southbound joint 3");
    assert!((config.traffic.heavy_vehicle_fraction - 0.22).abs() < f64::EPSILON);
    assert!((config.thermal.freeze_threshold_c - -2.0).abs() < f64::EPSILON);
    assert_eq!(config.server.addr, "127.0.0.1:9090");
    // Untouched sections keep their defaults.
    assert!(
        (config.traffic.window_capacity_vehicles - defaults::WINDOW_CAPACITY_VEHICLES).abs()
            < f64::EPSILON
    );
}

#[test]
fn fraction_above_one_fails_validation() {
    let file = write_config(
        r#"
        [traffic]
        heavy_vehicle_fraction = 1.3
        "#,
    );
    let err = JointConfig::load_from_file(file.path()).expect_err("must fail");
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn index_weights_must_sum_to_one() {
    let file = write_config(
        r#"
        [index]
        traffic_weight = 0.5
        thermal_weight = 0.5
        noise_weight = 0.5
        "#,
    );
    let err = JointConfig::load_from_file(file.path()).expect_err("must fail");
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn inverted_thermal_bounds_fail_validation() {
    let file = write_config(
        r#"
        [thermal]
        severe_cold_floor_c = 20.0
        mild_ceiling_c = 10.0
        "#,
    );
    let err = JointConfig::load_from_file(file.path()).expect_err("must fail");
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_config("[traffic\nheavy_vehicle_fraction = 0.2");
    let err = JointConfig::load_from_file(file.path()).expect_err("must fail");
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = JointConfig::load_from_file(std::path::Path::new("/nonexistent/joint_config.toml"))
        .expect_err("must fail");
    assert!(matches!(err, ConfigError::Io(_, _)));
}
