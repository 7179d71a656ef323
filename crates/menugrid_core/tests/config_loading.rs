use menugrid_core::{ConfigError, IngredientMode, MenuConfig, MenuPlanner};
use std::io::Write;

#[test]
fn toml_file_replaces_moments_and_days() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"
days = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
repeatable_families = [["snack_am", "snack_pm"]]
ingredient_mode = "strict"

[[moments]]
key = "snack_am"
label = "Morning snack"
aliases = ["Snack"]

[[moments]]
key = "lunch"
label = "Lunch"
aliases = ["LUNCH"]

[[moments]]
key = "snack_pm"
label = "Afternoon snack"
aliases = ["snack"]
"#
    )
    .expect("write config");

    let config = MenuConfig::from_toml_file(file.path()).expect("config should load");
    assert_eq!(config.days.names()[6], "Sun");
    assert_eq!(config.ingredient_mode, IngredientMode::Strict);
    assert_eq!(config.moments[0].aliases, vec!["snack".to_string()]);

    let planner = MenuPlanner::new(config).expect("valid planner");
    let grid = planner.parse("Snack\n  Apple - 1 dia\nLunch\n  Salad - 1 dia\nsnack\n  Nuts - 1 dia");
    let title = |key: &str| {
        grid.get(0, key)
            .expect("valid cell")
            .map(|option| option.title.clone())
    };
    assert_eq!(title("snack_am").as_deref(), Some("Apple"));
    assert_eq!(title("lunch").as_deref(), Some("Salad"));
    assert_eq!(title("snack_pm").as_deref(), Some("Nuts"));
    assert_eq!(grid.days()[0], "Mon");
}

#[test]
fn wrong_day_count_is_rejected() {
    let err = MenuConfig::from_toml_str(r#"days = ["Mon", "Tue"]"#).expect_err("must fail");
    assert!(matches!(err, ConfigError::Toml(_)), "unexpected error: {err}");
    assert!(err.to_string().contains("expected exactly 7 day names"), "{err}");
}

#[test]
fn unknown_fields_and_missing_files_are_errors() {
    let err = MenuConfig::from_toml_str("colour = \"blue\"").expect_err("must fail");
    assert!(matches!(err, ConfigError::Toml(_)));

    let dir = tempfile::tempdir().expect("temp dir");
    let err = MenuConfig::from_toml_file(dir.path().join("missing.toml")).expect_err("must fail");
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn planner_rejects_invalid_family() {
    let mut config = MenuConfig::default();
    config.repeatable_families[0] = menugrid_core::RepeatableFamily::new(["colacion1"]);
    let err = MenuPlanner::new(config).expect_err("single-slot family must fail");
    assert!(matches!(err, ConfigError::FamilyTooSmall(_)));
}
