use super::*;

#[test]
fn tolerance_follows_step_formula_and_floor() {
    assert_eq!(tolerance_for_index(0), 12);
    assert_eq!(tolerance_for_index(7), 12);
    assert_eq!(tolerance_for_index(8), 11);
    assert_eq!(tolerance_for_index(68), 4);
    assert_eq!(tolerance_for_index(72), 3);
    assert_eq!(tolerance_for_index(10_000), 3);
    assert_eq!(tolerance_for_index(usize::MAX), 3);
}

#[test]
fn method_phases_have_fixed_boundaries() {
    assert_eq!(method_for_index(0), Method::Flex);
    assert_eq!(method_for_index(22), Method::Flex);
    assert_eq!(method_for_index(23), Method::Grid);
    assert_eq!(method_for_index(45), Method::Grid);
    assert_eq!(method_for_index(46), Method::Absolute);
    assert_eq!(method_for_index(68), Method::Absolute);
}

#[test]
fn first_level_matches_shipped_text() {
    let lv = level_at(0);
    assert_eq!(lv.id, 1);
    assert_eq!(lv.title, "Level 1");
    assert_eq!(lv.description, "Move the crate to center using flex.");
    assert_eq!(lv.position, Position::Center);
    assert_eq!(lv.tolerance, 12);
    assert_eq!(
        lv.starter_css,
        "/* Level 1 — Goal: move the crate to center using flex. */\n\
/* Hint: on .stage use\n\
display: flex; justify-content: center; align-items: center; */\n\n\
/* Write your CSS below. You can target .stage and .crate */\n\
.stage {\n  /* your styles */\n}\n\
.crate {\n  /* optional crate styles */\n}"
    );
}

#[test]
fn description_uses_spaced_position_name() {
    let lv = level_at(47);
    assert_eq!(lv.position, Position::TopRight);
    assert_eq!(lv.method, Method::Absolute);
    assert_eq!(lv.description, "Move the crate to top right using absolute.");
    assert!(lv.starter_css.contains("Hint: position the crate absolutely"));
}

#[test]
fn zero_count_is_empty() {
    assert!(generate_levels(0).is_empty());
    assert!(LevelCatalog::generate(0).is_empty());
}

#[test]
fn catalog_lookup_by_index_and_id() {
    let cat = LevelCatalog::canonical();
    assert_eq!(cat.len(), CANONICAL_LEVEL_COUNT);
    assert_eq!(cat.get(68).map(|l| l.id), Some(69));
    assert!(cat.get(69).is_none());
    assert_eq!(cat.by_id(24).map(|l| l.method), Some(Method::Grid));
    assert!(cat.by_id(0).is_none());
    assert!(cat.by_id(70).is_none());
}

#[test]
fn from_levels_rejects_out_of_order_ids() {
    let mut levels = generate_levels(3);
    assert!(LevelCatalog::from_levels(levels.clone()).is_ok());
    levels.swap(0, 1);
    assert!(LevelCatalog::from_levels(levels).is_err());

    let mut levels = generate_levels(1);
    levels[0].tolerance = 0;
    assert!(LevelCatalog::from_levels(levels).is_err());
}

#[test]
fn catalog_json_is_a_plain_array() {
    let cat = LevelCatalog::generate(2);
    let v = serde_json::to_value(&cat).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[1]["position"], "top-left");
    assert_eq!(arr[1]["method"], "flex");
    assert!(arr[1]["starterCSS"].as_str().unwrap().contains(".crate {"));
    let back: LevelCatalog = serde_json::from_value(v).unwrap();
    assert_eq!(back, cat);
}

#[test]
fn deserializing_checks_ids_and_tolerance() {
    let mut levels = generate_levels(3);
    levels.swap(0, 1);
    let v = serde_json::to_value(&levels).unwrap();
    assert!(serde_json::from_value::<LevelCatalog>(v).is_err());

    let mut levels = generate_levels(2);
    levels[1].tolerance = 0;
    let v = serde_json::to_value(&levels).unwrap();
    let err = serde_json::from_value::<LevelCatalog>(v).unwrap_err();
    assert!(err.to_string().contains("positive tolerance"));
}
