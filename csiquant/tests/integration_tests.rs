//! Integration-level tests for the `csiquant` facade crate.

use csiquant::prelude::*;
use csiquant::{si, QuantityError};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

// ─────────────────────────────────────────────────────────────────────────────
// Copies
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn copy_quantity() {
    let in_m = 1000.0 * METERS;

    let copied = in_m;
    assert_eq!(copied.magnitude(), 1000.0);
    assert_eq!(copied.unit(), METERS);

    let boxed = Box::new(in_m);
    let deep = *boxed;
    assert_eq!(deep.magnitude(), 1000.0);
    assert_eq!(deep.unit(), METERS);
    assert_eq!(in_m.magnitude(), 1000.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn extract_quantity() {
    let in_m = 1000.0 * METERS;

    assert_eq!(in_m.get_as(KILOMETERS).unwrap(), 1.0);
    assert_eq!(in_m.get_as(MILLIMETERS).unwrap(), 1_000_000.0);

    assert!(in_m.get_as(VOLTS).unwrap_err().is_dimension_mismatch());
    assert!(in_m.get_as(in_m).unwrap_err().is_type_error());
}

#[test]
fn cvt_quantity() {
    let in_m = 1000.0 * METERS;

    let in_mm = in_m.cvt_to(MILLIMETERS).unwrap();
    assert_eq!(in_mm.magnitude(), 1_000_000.0);
    assert_eq!(in_mm.unit(), MILLIMETERS);

    let in_km = in_m.cvt_to(KILOMETERS).unwrap();
    assert_eq!(in_km.magnitude(), 1.0);

    assert!(in_m.cvt_to(VOLTS).unwrap_err().is_dimension_mismatch());
    assert!(in_m.cvt_to(1).unwrap_err().is_type_error());
}

#[test]
fn round_quantity() {
    let in_m = 1001.0 * METERS;

    let in_mm = in_m.round_to(MILLIMETERS).unwrap();
    assert_eq!(in_mm.magnitude(), 1_001_000.0);

    let in_km = in_m.round_to(KILOMETERS).unwrap();
    assert_eq!(in_km.magnitude(), 1.0);
    assert_eq!(in_km.unit(), KILOMETERS);

    assert!(in_m.round_to(MILLIGRAMS).unwrap_err().is_dimension_mismatch());
    assert!(in_m.round_to(1000).unwrap_err().is_type_error());
}

// ─────────────────────────────────────────────────────────────────────────────
// Tolerance comparisons
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn r_approx_quantity() {
    let in_gpa = 210.0 * GIGAPASCALS;
    let in_kpa = 210_000_002.0 * KILOPASCALS;
    let in_pa = 210_000_000_002.0 * PASCALS;

    assert!(in_gpa.r_approx(&in_pa).unwrap());
    assert!(in_pa.r_approx(&in_gpa).unwrap());

    assert!(!in_gpa.r_approx(&in_kpa).unwrap());
    assert!(!in_kpa.r_approx(&in_gpa).unwrap());

    assert!(in_gpa.r_approx_with(&in_kpa, 1e-8).unwrap());
    assert!(in_kpa.r_approx_with(&in_gpa, 1e-8).unwrap());
}

#[test]
fn a_approx_quantity() {
    let in_gpa = 210.0 * GIGAPASCALS;
    let in_pa = 210_000_000_001.0 * PASCALS;

    assert!(in_gpa.a_approx_with(&in_pa, 1.0).unwrap());
    assert!(in_pa.a_approx_with(&in_gpa, 1.0).unwrap());

    assert!(!in_gpa.a_approx(&in_pa).unwrap());
    assert!(!in_pa.a_approx(&in_gpa).unwrap());

    let other = 210.0 * GIGAWATTS;
    assert!(other.a_approx(&in_gpa).unwrap_err().is_dimension_mismatch());
    assert!(in_gpa.a_approx(&other).unwrap_err().is_dimension_mismatch());
}

#[test]
fn q_approx_quantity() {
    let in_mm = 1_000_001.0 * MILLIMETERS;
    let in_km = 1.0 * KILOMETERS;

    assert!(in_mm.q_approx(in_km, 2.0 * MILLIMETERS).unwrap());
    assert!(in_km.q_approx(in_mm, 2.0 * MILLIMETERS).unwrap());

    assert!(!in_mm.q_approx(in_km, 1.0 * MICROMETERS).unwrap());
    assert!(!in_km.q_approx(in_mm, 1.0 * MICROMETERS).unwrap());

    assert!(in_km
        .q_approx(in_mm, 1.0 * MILLIVOLTS)
        .unwrap_err()
        .is_dimension_mismatch());
    assert!(in_km
        .q_approx(1000.0 * VOLTS, 1.0 * MILLIMETERS)
        .unwrap_err()
        .is_dimension_mismatch());
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimension introspection
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn is_of_quantity() {
    let in_m = 1000.0 * METERS;

    assert!(in_m.is_of(METERS.dimension()).unwrap());
    assert!(in_m.is_of(MILLIMETERS.dimension()).unwrap());

    assert!(!in_m.is_of(MILLIGRAMS.dimension()).unwrap());
    assert!(!in_m.is_of(Operand::Absent).unwrap());

    let in_u = 1000.0 * UNITY;
    assert!(in_u.is_of(Operand::Absent).unwrap());
    assert!(in_u.is_of(None).unwrap());
    assert!(!in_m.is_of(None).unwrap());

    assert!(in_m.is_of(1).unwrap_err().is_type_error());
}

// ─────────────────────────────────────────────────────────────────────────────
// Value protocol
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn hash_quantity() {
    let mut set = HashSet::new();
    set.insert(1000.0 * METERS);
    set.insert(1.0 * KILOMETERS);
    set.insert(1_000_000.0 * MILLIMETERS);
    assert_eq!(set.len(), 1);

    set.insert(1000.0 * SECONDS);
    assert_eq!(set.len(), 2);
    assert!(set.contains(&(100_000.0 * CENTIMETERS)));
}

#[test]
fn ne_quantity() {
    assert_ne!(1.0 * METERS, 1.0 * SECONDS);
    assert_ne!(1.0 * METERS, 2.0 * METERS);
    assert!(!(1000.0 * METERS != 1.0 * KILOMETERS));
}

#[test]
fn order_quantity() {
    let short = 999.0 * METERS;
    let long = 1.0 * KILOMETERS;

    assert!(short.try_lt(&long).unwrap());
    assert!(short.try_le(&long).unwrap());
    assert!(long.try_gt(&short).unwrap());
    assert!(long.try_ge(&(1000.0 * METERS)).unwrap());
    assert_eq!(long.try_partial_cmp(&short).unwrap(), Some(Ordering::Greater));

    assert!(short.try_lt(&(1.0 * SECONDS)).unwrap_err().is_dimension_mismatch());
}

#[test]
fn float_quantity() {
    assert_eq!(f64::try_from(50.0 * PERCENT).unwrap(), 0.5);
    assert_eq!(f64::try_from(((3.0 * METERS) / (1.0 * MILLIMETERS)).unwrap()).unwrap(), 3000.0);

    let err = f64::try_from(3.0 * METERS).unwrap_err();
    assert!(matches!(err, QuantityError::DimensionMismatch { .. }));
}

#[test]
fn truth_quantity() {
    assert!((1.0 * METERS).is_nonzero());
    assert!((-1e-9 * VOLTS).is_nonzero());
    assert!(!(0.0 * METERS).is_nonzero());
    assert!(!(0.0 * UNITY).is_nonzero());
}

#[test]
fn abs_quantity() {
    let q = (-2.5 * KILONEWTONS).abs();
    assert_eq!(q.magnitude(), 2.5);
    assert_eq!(q.unit(), KILONEWTONS);
}

#[test]
fn invert_quantity() {
    let f = (4.0 * SECONDS).invert().unwrap();
    assert_eq!(f, 0.25 * HERTZ);
    assert_eq!(f.unit().invert(), Ok(SECONDS));
}

#[test]
fn neg_quantity() {
    let q = -(3.0 * AMPERES);
    assert_eq!(q.magnitude(), -3.0);
    assert_eq!(q.unit(), AMPERES);
    assert_eq!(-q, 3.0 * AMPERES);
}

#[test]
fn pow_quantity() {
    let area = (2.0 * KILOMETERS).powi(2).unwrap();
    assert_eq!(area.magnitude(), 4.0);
    assert_eq!(area, 4_000_000.0 * SQUARE_METERS);

    let side = (9.0 * SQUARE_METERS).pow(Rational::new(1, 2)).unwrap();
    assert_eq!(side, 3.0 * METERS);
    assert!(side.is_of(Dimension::LENGTH).unwrap());
}

#[test]
fn mul_quantity() {
    assert_eq!((2.0 * NEWTONS) * (3.0 * METERS), Ok(6.0 * JOULES));
    assert_eq!((1.0 * KILOWATTS) * (1.0 * HOURS), Ok(3_600_000.0 * JOULES));
    assert_eq!(2.0 * (3.0 * METERS), 6.0 * METERS);
    assert_eq!((3.0 * METERS) * 2.0, 6.0 * METERS);
}

#[test]
fn div_quantity() {
    let v = ((36.0 * KILOMETERS) / (1.0 * HOURS)).unwrap();
    assert!(v.is_of(Dimension::VELOCITY).unwrap());
    assert_relative_eq!(v.get_as(METERS_PER_SECOND).unwrap(), 10.0);

    let ratio = ((1.0 * KILOMETERS) / (1.0 * METERS)).unwrap();
    assert!(ratio.is_dimensionless());
    assert_eq!(f64::try_from(ratio).unwrap(), 1000.0);

    assert_eq!((6.0 * METERS) / 2.0, 3.0 * METERS);
}

#[test]
fn unrepresentable_units_are_errors() {
    let huge = 1.0 * METERS.scaled(1e200);
    let product = huge * huge;
    assert_eq!(product, Err(QuantityError::InvalidScale(f64::INFINITY)));

    let tiny = 1.0 * METERS.scaled(1e-200);
    assert!((tiny * tiny).unwrap_err().is_invalid_scale());
    assert!(METERS.try_scaled(1e-200).and_then(|u| u.power(2)).is_err());

    let err = (2.0 * METERS)
        .pow(65_536)
        .and_then(|q| q.pow(65_536))
        .unwrap_err();
    assert!(matches!(err, QuantityError::ExponentOverflow));
    assert!(Rational::checked_new(i32::MIN, -1).is_none());
}

#[test]
fn add_quantity() {
    let sum = ((1.0 * KILOMETERS) + (500.0 * METERS)).unwrap();
    assert_eq!(sum.unit(), KILOMETERS);
    assert_eq!(sum.magnitude(), 1.5);

    assert!(((1.0 * KILOMETERS) + (1.0 * SECONDS))
        .unwrap_err()
        .is_dimension_mismatch());
}

#[test]
fn sub_quantity() {
    let diff = ((1.0 * HOURS) - (90.0 * MINUTES)).unwrap();
    assert_eq!(diff.unit(), HOURS);
    assert_abs_diff_eq!(diff.magnitude(), -0.5, epsilon = 1e-12);

    assert!(((1.0 * HOURS) - (1.0 * METERS))
        .unwrap_err()
        .is_dimension_mismatch());
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn catalog_lookup() {
    assert_eq!(si::lookup("millivolts"), Some(MILLIVOLTS));
    assert_eq!(si::lookup("mV"), None);
    assert!(si::CATALOG.iter().all(|(name, unit)| si::lookup(name) == Some(*unit)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_add_then_sub_restores(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        let x = a * KILOMETERS;
        let y = b * METERS;
        let back = ((x + y).unwrap() - y).unwrap();
        prop_assert_eq!(back.unit(), KILOMETERS);
        prop_assert!((back.magnitude() - a).abs() <= 1e-9 * a.abs().max(1.0));
    }

    #[test]
    fn prop_mul_div_cancel(a in 1e-3f64..1e6, b in 1e-3f64..1e6) {
        let x = a * NEWTONS;
        let y = b * METERS;
        let back = ((x * y).unwrap() / y).unwrap();
        prop_assert!(back.is_of(Dimension::FORCE).unwrap());
        prop_assert!(back.r_approx(&x).unwrap());
    }

    #[test]
    fn prop_equality_is_transitive(n in -1e6f64..1e6) {
        let in_m = n * METERS;
        let in_mm = in_m.cvt_to(MILLIMETERS).unwrap();
        let in_km = in_m.cvt_to(KILOMETERS).unwrap();
        if in_m == in_mm && in_mm == in_km {
            prop_assert_eq!(in_m, in_km);
        }
        if in_m == in_km && in_km == in_mm {
            prop_assert_eq!(in_m, in_mm);
        }
        prop_assert_eq!(in_m == in_mm, in_mm == in_m);
    }
}
