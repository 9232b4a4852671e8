//! Behavioural checks of the lap joint sizing over a grid of valid inputs.

use weld_core::calculations::lap_joint::EFFICIENCY_TOLERANCE;
use weld_core::{compute_joint, CalcError, SteelGrade};

const FORCES_KN: [f64; 10] = [0.5, 1.0, 12.3, 75.0, 100.0, 333.3, 500.0, 501.0, 999.9, 2500.0];
const THICKNESSES_MM: [f64; 10] = [0.1, 0.3, 1.0, 3.0, 6.0, 8.5, 10.0, 12.0, 25.0, 40.0];
const WIDTHS_MM: [f64; 3] = [50.0, 200.0, 1200.0];

/// Calls `check` for every (force, t1, t2) combination of the grid.
fn for_each_case(mut check: impl FnMut(f64, f64, f64)) {
    for &p in &FORCES_KN {
        for &t1 in &THICKNESSES_MM {
            for &t2 in &THICKNESSES_MM {
                check(p, t1, t2);
            }
        }
    }
}

#[test]
fn connection_strength_covers_demand() {
    for_each_case(|p, t1, t2| {
        let result = compute_joint(p, 200.0, t1, t2).unwrap();
        assert!(
            result.connection_strength_kn >= p * (1.0 - EFFICIENCY_TOLERANCE),
            "P={} t1={} t2={}: strength {} < demand",
            p,
            t1,
            t2,
            result.connection_strength_kn
        );
        assert!(result.efficiency >= 1.0 - EFFICIENCY_TOLERANCE);
        assert!(result.passes(), "P={} t1={} t2={}", p, t1, t2);
    });
}

#[test]
fn weld_length_is_positive_and_matches_connection_length() {
    for_each_case(|p, t1, t2| {
        let result = compute_joint(p, 200.0, t1, t2).unwrap();
        assert!(result.weld_length_mm > 0);
        assert_eq!(result.connection_length_mm, result.weld_length_mm);
        assert_eq!(result.weld_size_mm, t1.min(t2));
    });
}

#[test]
fn weld_length_is_smallest_sufficient_whole_millimetre() {
    for_each_case(|p, t1, t2| {
        let result = compute_joint(p, 200.0, t1, t2).unwrap();
        let raw = p * 1000.0 / (t1.min(t2) * 250.0);
        let length = result.weld_length_mm as f64;
        assert!(length >= raw);
        assert!(length - 1.0 < raw);
    });
}

#[test]
fn governing_grade_is_always_e250() {
    for_each_case(|p, t1, t2| {
        let result = compute_joint(p, 200.0, t1, t2).unwrap();
        assert_eq!(result.weld_material_grade, SteelGrade::E250);
        assert_eq!(result.yield_strength_plate1_mpa, 250.0);
        assert_eq!(result.yield_strength_plate2_mpa, 250.0);
    });
}

#[test]
fn plate_width_does_not_change_result() {
    for_each_case(|p, t1, t2| {
        let baseline = compute_joint(p, WIDTHS_MM[0], t1, t2).unwrap();
        for &w in &WIDTHS_MM[1..] {
            assert_eq!(compute_joint(p, w, t1, t2).unwrap(), baseline);
        }
    });
}

#[test]
fn efficiency_is_exactly_one_for_integral_lengths() {
    // (P, t) pairs where P*1000 / (t*250) is a whole number
    for (p, t) in [(500.0, 10.0), (250.0, 5.0), (100.0, 8.0), (75.0, 3.0)] {
        let result = compute_joint(p, 200.0, t, t + 2.0).unwrap();
        assert_eq!(result.efficiency, 1.0, "P={} t={}", p, t);
        assert_eq!(result.connection_strength_kn, p);
    }
}

#[test]
fn exact_sizing_at_thin_plates_passes() {
    // whole-number raw lengths whose f64 capacity lands just either side of P
    for (p, t, expected_length) in [(12.3, 0.3, 164), (999.9, 0.1, 39996)] {
        let result = compute_joint(p, 200.0, t, t).unwrap();
        assert_eq!(result.weld_length_mm, expected_length, "P={} t={}", p, t);
        assert!((result.efficiency - 1.0).abs() <= EFFICIENCY_TOLERANCE);
        assert!(result.passes(), "P={} t={}", p, t);
    }
}

#[test]
fn efficiency_exceeds_one_for_fractional_lengths() {
    for (p, t, expected_length) in [(501.0, 10.0, 201), (1.0, 10.0, 1), (333.3, 6.0, 223)] {
        let result = compute_joint(p, 200.0, t, t + 2.0).unwrap();
        assert_eq!(result.weld_length_mm, expected_length, "P={} t={}", p, t);
        assert!(result.efficiency > 1.0, "P={} t={}", p, t);
    }
}

#[test]
fn worked_example() {
    let result = compute_joint(500.0, 200.0, 10.0, 12.0).unwrap();
    assert_eq!(result.weld_size_mm, 10.0);
    assert_eq!(result.weld_material_grade, SteelGrade::E250);
    assert_eq!(result.weld_length_mm, 200);
    assert_eq!(result.connection_strength_kn, 500.0);
    assert_eq!(result.efficiency, 1.0);
    assert_eq!(result.connection_length_mm, 200);
}

#[test]
fn rounding_example() {
    let result = compute_joint(501.0, 200.0, 10.0, 12.0).unwrap();
    assert_eq!(result.weld_length_mm, 201);
    assert_eq!(result.connection_strength_kn, 502.5);
    assert!((result.efficiency - 1.003).abs() < 1e-3);
}

#[test]
fn invalid_inputs_are_rejected() {
    let cases = [
        (0.0, 200.0, 10.0, 12.0, "tensile_force_kn"),
        (-5.0, 200.0, 10.0, 12.0, "tensile_force_kn"),
        (500.0, 200.0, 0.0, 12.0, "thickness1_mm"),
        (500.0, 200.0, 10.0, -1.0, "thickness2_mm"),
    ];
    for (p, w, t1, t2, expected_field) in cases {
        match compute_joint(p, w, t1, t2) {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected InvalidInput for {:?}, got {:?}", (p, w, t1, t2), other),
        }
    }
}

#[test]
fn error_json_is_tagged() {
    let err = compute_joint(500.0, 200.0, 0.0, 0.0).unwrap_err();
    let json: serde_json::Value = serde_json::to_value(&err).unwrap();
    assert_eq!(json["type"], "InvalidInput");
    assert_eq!(json["details"]["field"], "thickness1_mm");
}
