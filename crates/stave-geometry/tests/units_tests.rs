//! Property tests for length units and points.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use stave_geometry::{AnchoredPoint, GeometryError, PagePoint, Point, Unit, UnitKind};

fn finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite() && v.abs() < 1e9)
}

#[quickcheck]
fn addition_is_commensurable_across_kinds(mm: f64, staff: f64) -> TestResult {
    if !finite(&[mm, staff]) {
        return TestResult::discard();
    }
    let a = Unit::mm(mm);
    let b = Unit::scaled(staff, 1.75);
    let left = (a + b).base_value();
    let right = (b + a).base_value();
    TestResult::from_bool((left - right).abs() <= 1e-6 * (1.0 + left.abs()))
}

#[quickcheck]
fn ordering_follows_base_values(a: f64, b: f64) -> TestResult {
    if !finite(&[a, b]) {
        return TestResult::discard();
    }
    let x = Unit::inch(a);
    let y = Unit::graphic(b);
    TestResult::from_bool((x < y) == (x.base_value() < y.base_value()))
}

#[quickcheck]
fn negation_cancels(a: f64) -> TestResult {
    if !finite(&[a]) {
        return TestResult::discard();
    }
    let x = Unit::mm(a);
    TestResult::from_bool((x + -x).approx_eq(Unit::ZERO))
}

#[test]
fn to_kind_preserves_length() {
    let a = Unit::inch(2.0).to_kind(UnitKind::Mm);
    assert_eq!(a.kind(), UnitKind::Mm);
    assert!((a.value() - 50.8).abs() < 1e-9);
}

#[test]
fn exact_comparisons_ignore_kind_but_not_noise() {
    assert!(Unit::mm(0.0).is_zero());
    assert!(!Unit::graphic(1e-12).is_zero());
    assert_eq!(Unit::mm(0.0), Unit::ZERO);
    assert_ne!(Unit::graphic(1.0), Unit::graphic(1.0 + 1e-12));
    assert!(Unit::graphic(1.0).approx_eq(Unit::graphic(1.0 + 1e-12)));
}

#[test]
fn sum_of_units() {
    let total: Unit = [Unit::graphic(1.0), Unit::graphic(2.5), Unit::graphic(3.5)]
        .into_iter()
        .sum();
    assert_eq!(total, Unit::graphic(7.0));
}

#[test]
fn unit_json_keeps_kind() {
    let json = serde_json::to_string(&Unit::mm(12.0)).unwrap();
    let back: Unit = serde_json::from_str(&json).unwrap();
    assert_eq!(back.kind(), UnitKind::Mm);
    assert_eq!(back.value(), 12.0);
}

#[test]
fn page_point_from_point_is_on_first_page() {
    let pos: PagePoint = Point::graphic(3.0, 4.0).into();
    assert_eq!(pos.page, 0);
    assert_eq!(pos.point(), Point::graphic(3.0, 4.0));
}

#[test]
fn anchored_points_report_mismatch() {
    let a = AnchoredPoint::from_point(Point::graphic(1.0, 1.0), "staff");
    let b = AnchoredPoint::from_point(Point::graphic(1.0, 1.0), "frame");
    let err = a.try_add(b).unwrap_err();
    assert_eq!(
        err,
        GeometryError::MismatchedAnchors {
            left: "\"staff\"".to_string(),
            right: "\"frame\"".to_string(),
        }
    );
    assert_eq!(a.scale(2.0).point, Point::graphic(2.0, 2.0));
}
