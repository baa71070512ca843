use super::*;
use crate::{
    level::catalog::level_at,
    level::model::Position,
    validate::surface::{ElementSnapshot, SurfaceSnapshot},
};

const STAGE: Rect = Rect::new(0.0, 0.0, 600.0, 288.0);

fn crate_at(center: Point) -> Rect {
    Rect::from_center_size(center, (80.0, 80.0))
}

fn flex() -> ComputedStyle {
    ComputedStyle::with_display("flex")
}

#[test]
fn centered_crate_passes_flex_center_level() {
    let lv = level_at(0);
    assert_eq!((lv.position, lv.method, lv.tolerance), (Position::Center, Method::Flex, 12));
    let res = validate(
        &lv,
        STAGE,
        crate_at(Point::new(300.0, 144.0)),
        &flex(),
        &ComputedStyle::default(),
    )
    .unwrap();
    assert!(res.method_satisfied);
    assert!(res.passed);
    assert_eq!(res.distance, 0.0);
    assert_eq!(res.message, "Nice! Level 1 complete ✓");
}

#[test]
fn distant_crate_reports_distance_and_tolerance() {
    let lv = level_at(0);
    let res = validate(
        &lv,
        STAGE,
        crate_at(Point::new(315.0, 144.0)),
        &flex(),
        &ComputedStyle::default(),
    )
    .unwrap();
    assert!(res.method_satisfied);
    assert!(!res.passed);
    assert_eq!(res.distance, 15.0);
    assert_eq!(
        res.message,
        "Move the crate closer to center (distance 15.0px, need ≤ 12px)."
    );
}

#[test]
fn distance_exactly_at_tolerance_passes() {
    let lv = level_at(0);
    let res = validate(
        &lv,
        STAGE,
        crate_at(Point::new(300.0, 156.0)),
        &flex(),
        &ComputedStyle::default(),
    )
    .unwrap();
    assert!(res.passed);
}

#[test]
fn absolute_level_requires_absolute_crate() {
    let lv = level_at(46);
    assert_eq!(lv.method, Method::Absolute);
    let target = target_point(STAGE, lv.position);
    let res = validate(
        &lv,
        STAGE,
        crate_at(target),
        &flex(),
        &ComputedStyle::with_position("static"),
    )
    .unwrap();
    assert!(!res.method_satisfied);
    assert!(!res.passed);
    assert_eq!(res.distance, 0.0);
    assert_eq!(res.message, "Absolutely position the crate.");
}

#[test]
fn method_hint_wins_over_distance_feedback() {
    let lv = level_at(23);
    assert_eq!(lv.method, Method::Grid);
    let res = validate(
        &lv,
        STAGE,
        crate_at(Point::new(10.0, 10.0)),
        &flex(),
        &ComputedStyle::default(),
    )
    .unwrap();
    assert_eq!(res.message, "Make the arena a grid container.");
}

#[test]
fn inline_variants_satisfy_container_methods() {
    let lv = level_at(1);
    let target = target_point(STAGE, Position::TopLeft);
    let res = validate(
        &lv,
        STAGE,
        crate_at(target),
        &ComputedStyle::with_display("inline-flex"),
        &ComputedStyle::default(),
    )
    .unwrap();
    assert!(res.passed);
    assert_eq!(res.target, Point::new(60.0, 60.0));
}

#[test]
fn unmeasurable_geometry_gives_no_verdict() {
    let lv = level_at(0);
    assert!(validate(&lv, Rect::ZERO, crate_at(Point::ZERO), &flex(), &flex()).is_none());
    assert!(validate(&lv, STAGE, Rect::new(5.0, 5.0, 5.0, 5.0), &flex(), &flex()).is_none());
}

#[test]
fn validate_is_deterministic() {
    let lv = level_at(30);
    let c = crate_at(Point::new(123.4, 98.7));
    let a = validate(&lv, STAGE, c, &flex(), &ComputedStyle::default());
    let b = validate(&lv, STAGE, c, &flex(), &ComputedStyle::default());
    assert_eq!(a, b);
}

#[test]
fn surface_adapter_matches_direct_call() {
    let lv = level_at(0);
    let snap = SurfaceSnapshot::new(
        ElementSnapshot {
            rect: STAGE,
            style: flex(),
        },
        ElementSnapshot {
            rect: crate_at(Point::new(305.0, 144.0)),
            style: ComputedStyle::default(),
        },
    );
    let via_surface = validate_surface(&lv, &snap).unwrap();
    let direct = validate(
        &lv,
        STAGE,
        crate_at(Point::new(305.0, 144.0)),
        &flex(),
        &ComputedStyle::default(),
    )
    .unwrap();
    assert_eq!(via_surface, direct);

    let missing_crate = SurfaceSnapshot {
        crate_el: None,
        ..snap
    };
    assert!(validate_surface(&lv, &missing_crate).is_none());
}
