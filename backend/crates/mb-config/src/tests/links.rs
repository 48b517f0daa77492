use crate::LinksConfig;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};

#[test]
fn given_default_links_config_when_validate_then_ok() {
    assert_that!(LinksConfig::default().validate(), ok(anything()));
}

#[test]
fn given_parent_traversal_when_validate_then_error() {
    // Given
    let config = LinksConfig {
        path: "../outside.json".to_string(),
    };

    // When
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    assert_that!(
        format!("{}", result.unwrap_err()),
        contains_substring("'..'")
    );
}

#[test]
fn given_absolute_path_when_validate_then_error() {
    // Given
    let config = LinksConfig {
        path: "/etc/links.json".to_string(),
    };

    // When / Then
    assert_that!(config.validate(), err(anything()));
}
