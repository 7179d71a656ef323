use menugrid_core::distributor::distribute;
use menugrid_core::{
    parse, parse_with_report, Category, DiagnosticKind, MenuConfig, MenuOption, MomentDefinition,
    MomentSlot, WeeklyGrid,
};

fn row_titles(grid: &WeeklyGrid, key: &str) -> Vec<Option<String>> {
    grid.row(key)
        .expect("configured moment")
        .into_iter()
        .map(|cell| cell.map(|option| option.title.clone()))
        .collect()
}

fn some(title: &str) -> Option<String> {
    Some(title.to_string())
}

#[test]
fn durations_fill_consecutive_slots_then_pad() {
    let grid = parse(
        "Cena\n  Sopa - 2 dias\n  Tacos - 1 dia\n  Pasta - 1 dias",
        &MenuConfig::default(),
    );
    assert_eq!(
        row_titles(&grid, "cena"),
        vec![some("Sopa"), some("Sopa"), some("Tacos"), some("Pasta"), None, None, None]
    );
}

#[test]
fn overflow_keeps_first_seven_and_reports_the_rest() {
    let report = parse_with_report(
        "Desayuno\n  Avena - 5 dias\n  Huevos - 4 dias\n  Fruta - 2 dias",
        &MenuConfig::default(),
    );
    assert_eq!(
        row_titles(&report.grid, "desayuno"),
        vec![
            some("Avena"),
            some("Avena"),
            some("Avena"),
            some("Avena"),
            some("Avena"),
            some("Huevos"),
            some("Huevos"),
        ]
    );
    assert_eq!(
        report.diagnostics.last().map(|d| d.kind.clone()),
        Some(DiagnosticKind::OverflowDiscard {
            moment: "desayuno".into(),
            discarded: 4,
        })
    );
}

#[test]
fn huge_durations_are_truncated_without_error() {
    let grid = parse("Cena\n  Sopa - 4000000000 dias", &MenuConfig::default());
    assert!(row_titles(&grid, "cena").iter().all(|title| title.as_deref() == Some("Sopa")));
}

#[test]
fn option_cells_share_one_instance() {
    let grid = parse("Comida\n  Pollo - 3 dias", &MenuConfig::default());
    let first = grid.get(0, "comida").unwrap().expect("filled");
    let third = grid.get(2, "comida").unwrap().expect("filled");
    assert!(std::sync::Arc::ptr_eq(first, third));
}

#[test]
fn categories_sharing_a_moment_are_concatenated_in_source_order() {
    let mut first = Category::new("Comida", MomentSlot::Mapped("comida".into()));
    first.options.push(MenuOption::new("Pollo", 3));
    let mut unmapped = Category::new("Postre", MomentSlot::Unmapped(1));
    unmapped.options.push(MenuOption::new("Flan", 7));
    let mut second = Category::new("Comida ligera", MomentSlot::Mapped("comida".into()));
    second.options.push(MenuOption::new("Pescado", 2));
    second.options.push(MenuOption::new("Res", 5));

    let distribution = distribute(vec![first, unmapped, second], &MenuConfig::default());
    assert_eq!(
        row_titles(&distribution.grid, "comida"),
        vec![
            some("Pollo"),
            some("Pollo"),
            some("Pollo"),
            some("Pescado"),
            some("Pescado"),
            some("Res"),
            some("Res"),
        ]
    );
    assert_eq!(distribution.grid.filled_cells(), 7);
    assert_eq!(
        distribution.diagnostics[0].kind,
        DiagnosticKind::OverflowDiscard {
            moment: "comida".into(),
            discarded: 3,
        }
    );
}

#[test]
fn renamed_moments_drive_the_rows() {
    let config = MenuConfig {
        moments: vec![
            MomentDefinition::new("breakfast", "Breakfast", ["breakfast"]),
            MomentDefinition::new("dinner", "Dinner", ["dinner", "supper"]),
        ],
        repeatable_families: Vec::new(),
        ..MenuConfig::default()
    }
    .into_validated()
    .expect("valid config");
    let grid = parse("Supper\n  Soup - 1 dia\nComida\n  Pollo - 7 dias", &config);
    assert_eq!(grid.moment_keys(), &["breakfast".to_string(), "dinner".to_string()]);
    assert_eq!(row_titles(&grid, "dinner")[0], some("Soup"));
    assert_eq!(grid.filled_cells(), 1);
}
