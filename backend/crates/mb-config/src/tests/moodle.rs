use crate::MoodleConfig;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};

fn valid() -> MoodleConfig {
    MoodleConfig {
        base_url: "https://campus.example.edu".to_string(),
        ..MoodleConfig::default()
    }
}

#[test]
fn given_valid_moodle_config_when_validate_then_ok() {
    assert_that!(valid().validate(), ok(anything()));
}

#[test]
fn given_empty_base_url_when_validate_then_error_mentions_base_url() {
    // Given
    let config = MoodleConfig::default();

    // When
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    assert_that!(
        format!("{}", result.unwrap_err()),
        contains_substring("base_url")
    );
}

#[test]
fn given_non_http_base_url_when_validate_then_error() {
    // Given
    let config = MoodleConfig {
        base_url: "ftp://campus.example.edu".to_string(),
        ..MoodleConfig::default()
    };

    // When
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_zero_rpc_timeout_when_validate_then_error() {
    // Given
    let config = MoodleConfig {
        rpc_timeout_secs: 0,
        ..valid()
    };

    // When
    let result = config.validate();

    // Then
    assert_that!(
        format!("{}", result.unwrap_err()),
        contains_substring("rpc_timeout_secs")
    );
}

#[test]
fn given_file_timeout_above_max_when_validate_then_error() {
    // Given
    let config = MoodleConfig {
        file_timeout_secs: 301,
        ..valid()
    };

    // When
    let result = config.validate();

    // Then
    assert_that!(
        format!("{}", result.unwrap_err()),
        contains_substring("file_timeout_secs")
    );
}

#[test]
fn given_timeouts_at_bounds_when_validate_then_ok() {
    // Given
    let config = MoodleConfig {
        rpc_timeout_secs: 1,
        file_timeout_secs: 300,
        ..valid()
    };

    // When / Then
    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_trailing_slash_when_site_root_then_slash_removed() {
    // Given
    let config = MoodleConfig {
        base_url: "https://campus.example.edu/".to_string(),
        ..MoodleConfig::default()
    };

    // When / Then
    assert_that!(config.site_root(), eq("https://campus.example.edu"));
}
