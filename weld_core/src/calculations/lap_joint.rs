//! # Welded Lap Joint Calculation
//!
//! Sizes the weld of a lap joint between two plates under axial tension.
//! No throat reduction is applied: the weld area is leg × length.
//!
//! ## Procedure
//!
//! 1. Governing grade: the weakest entry of [`MATERIAL_GRADES`]
//! 2. Weld size: s = min(t1, t2)
//! 3. Demand: P (kN) converted to N
//! 4. Required length: L = P / (s × fy), rounded up to a whole millimetre
//! 5. Capacity: s × L × fy, reported in kN
//! 6. Efficiency: capacity / P
//!
//! ## Assumptions
//!
//! - Weld leg equals the thinner plate thickness
//! - Both plates take the governing (weakest) grade
//! - Connection length equals weld length; plate width does not participate
//!
//! ## Example
//!
//! ```rust
//! use weld_core::calculations::lap_joint::{calculate, LapJointInput};
//!
//! let input = LapJointInput {
//!     label: "LJ-1".to_string(),
//!     tensile_force_kn: 500.0,
//!     plate_width_mm: 200.0,
//!     thickness1_mm: 10.0,
//!     thickness2_mm: 12.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.weld_length_mm, 200);
//! assert_eq!(result.efficiency, 1.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{weakest_grade, SteelGrade, MATERIAL_GRADES};
use crate::units::{Kilonewtons, Millimeters, Newtons};

/// Largest weld length that is still an exact integer in f64 (2^53 mm).
const MAX_WELD_LENGTH_MM: f64 = 9_007_199_254_740_992.0;

const CALC_TYPE: &str = "Lap Joint";

/// Relative slack allowed when comparing capacity against demand.
///
/// `s × L × fy / 1000` is evaluated in f64 after `P × 1000 / (s × fy)` was
/// rounded up, so a weld sized to exactly the demand can land a few ULPs
/// either side of P (e.g. 12.3 kN on 0.3 mm plates gives 12.299999999999999).
pub const EFFICIENCY_TOLERANCE: f64 = 16.0 * f64::EPSILON;

/// Input parameters for a welded lap joint.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "LJ-1",
///   "tensile_force_kn": 500.0,
///   "plate_width_mm": 200.0,
///   "thickness1_mm": 10.0,
///   "thickness2_mm": 12.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapJointInput {
    /// User label for this joint (e.g., "LJ-1", "Splice at grid B")
    #[serde(default)]
    pub label: String,

    /// Axial tensile force in kilonewtons
    pub tensile_force_kn: f64,

    /// Plate width in millimetres. Recorded but not used by the sizing.
    pub plate_width_mm: f64,

    /// Thickness of plate 1 in millimetres
    pub thickness1_mm: f64,

    /// Thickness of plate 2 in millimetres
    pub thickness2_mm: f64,
}

impl LapJointInput {
    /// Create an unlabelled input
    pub fn new(tensile_force_kn: f64, plate_width_mm: f64, thickness1_mm: f64, thickness2_mm: f64) -> Self {
        Self {
            label: String::new(),
            tensile_force_kn,
            plate_width_mm,
            thickness1_mm,
            thickness2_mm,
        }
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Validate input parameters.
    ///
    /// Fields are checked in the order force, thickness 1, thickness 2 and
    /// the first failure is reported. Width is not checked.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("tensile_force_kn", self.tensile_force_kn, "Tensile force")?;
        require_positive("thickness1_mm", self.thickness1_mm, "Thickness of plate 1")?;
        require_positive("thickness2_mm", self.thickness2_mm, "Thickness of plate 2")?;
        Ok(())
    }

    /// Weld leg size: the thinner of the two plates
    pub fn weld_size(&self) -> Millimeters {
        Millimeters(self.thickness1_mm.min(self.thickness2_mm))
    }
}

fn require_positive(field: &str, value: f64, name: &str) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be a finite number", name),
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be positive", name),
        ));
    }
    Ok(())
}

/// Results from lap joint calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "weld_size_mm": 10.0,
///   "weld_material_grade": "E250",
///   "weld_length_mm": 201,
///   "connection_strength_kn": 502.5,
///   "yield_strength_plate1_mpa": 250.0,
///   "yield_strength_plate2_mpa": 250.0,
///   "connection_length_mm": 201,
///   "efficiency": 1.0029940119760479
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapJointResult {
    /// Weld leg size (mm)
    pub weld_size_mm: f64,

    /// Governing material grade
    pub weld_material_grade: SteelGrade,

    /// Required weld length, rounded up to a whole millimetre
    pub weld_length_mm: u64,

    /// Capacity of the weld as detailed (kN)
    pub connection_strength_kn: f64,

    /// Yield strength used for plate 1 (MPa)
    pub yield_strength_plate1_mpa: f64,

    /// Yield strength used for plate 2 (MPa)
    pub yield_strength_plate2_mpa: f64,

    /// Overlap length of the connection (mm), equal to the weld length
    pub connection_length_mm: u64,

    /// Capacity over demand
    pub efficiency: f64,
}

impl LapJointResult {
    /// Display names of the report fields, in output order
    pub const FIELD_NAMES: [&'static str; 8] = [
        "Weld Size (mm)",
        "Weld Material Grade",
        "Weld Length (mm)",
        "Connection Strength (kN)",
        "Yield Strength Plate 1 (MPa)",
        "Yield Strength Plate 2 (MPa)",
        "Length of Connection (mm)",
        "Efficiency",
    ];

    /// Check if the detailed weld carries the demand.
    ///
    /// Efficiency is compared against 1.0 with [`EFFICIENCY_TOLERANCE`], so
    /// welds sized exactly to the demand pass despite f64 rounding.
    pub fn passes(&self) -> bool {
        self.efficiency >= 1.0 - EFFICIENCY_TOLERANCE
    }

    /// Field name / rendered value pairs in output order.
    ///
    /// Floats render in shortest round-trip form with at least one decimal
    /// ("500.0", "1.0029940119760479"); lengths render as integers.
    pub fn report_lines(&self) -> Vec<(&'static str, String)> {
        let values = [
            format_float(self.weld_size_mm),
            self.weld_material_grade.to_string(),
            self.weld_length_mm.to_string(),
            format_float(self.connection_strength_kn),
            format_float(self.yield_strength_plate1_mpa),
            format_float(self.yield_strength_plate2_mpa),
            self.connection_length_mm.to_string(),
            format_float(self.efficiency),
        ];
        Self::FIELD_NAMES.into_iter().zip(values).collect()
    }

    /// Serialize to pretty JSON
    pub fn to_json_pretty(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for LapJointResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in self.report_lines() {
            writeln!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

/// Size the weld of a lap joint.
///
/// # Arguments
///
/// * `input` - Joint parameters
///
/// # Returns
///
/// * `Ok(LapJointResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid or the weld degenerates
pub fn calculate(input: &LapJointInput) -> CalcResult<LapJointResult> {
    if let Err(e) = input.validate() {
        warn!("Rejected lap joint input '{}': {}", input.label, e);
        return Err(e);
    }

    let material = weakest_grade(&MATERIAL_GRADES)
        .ok_or_else(|| CalcError::material_not_found("governing grade (empty grade table)"))?;
    let fy = material.yield_strength;
    debug!("Governing grade {} (fy = {} MPa)", material.grade, fy.value());

    let weld_size = input.weld_size();
    if weld_size.value() <= 0.0 {
        return Err(CalcError::degenerate_weld(weld_size.value()));
    }

    let demand: Newtons = Kilonewtons(input.tensile_force_kn).into();
    let raw_length = demand / (weld_size * fy);
    if !raw_length.value().is_finite() || raw_length.value() <= 0.0 {
        return Err(CalcError::calculation_failed(
            CALC_TYPE,
            format!("required weld length {} mm is out of range", raw_length.value()),
        ));
    }

    let rounded = raw_length.value().ceil();
    if rounded > MAX_WELD_LENGTH_MM {
        return Err(CalcError::calculation_failed(
            CALC_TYPE,
            format!("required weld length {} mm exceeds representable range", rounded),
        ));
    }
    let weld_length_mm = rounded as u64;

    let weld_area = weld_size * Millimeters(weld_length_mm as f64);
    let connection_strength: Kilonewtons = (weld_area * fy).into();
    let efficiency = connection_strength.value() / input.tensile_force_kn;

    debug!(
        "Weld length {:.3} mm rounded up to {} mm, capacity {} kN",
        raw_length.value(),
        weld_length_mm,
        connection_strength.value()
    );

    Ok(LapJointResult {
        weld_size_mm: weld_size.value(),
        weld_material_grade: material.grade,
        weld_length_mm,
        connection_strength_kn: connection_strength.value(),
        yield_strength_plate1_mpa: fy.value(),
        yield_strength_plate2_mpa: fy.value(),
        connection_length_mm: weld_length_mm,
        efficiency,
    })
}

/// Positional form of [`calculate`]: force (kN), width (mm), thicknesses (mm).
pub fn compute_joint(
    tensile_force_kn: f64,
    plate_width_mm: f64,
    thickness1_mm: f64,
    thickness2_mm: f64,
) -> CalcResult<LapJointResult> {
    calculate(&LapJointInput::new(tensile_force_kn, plate_width_mm, thickness1_mm, thickness2_mm))
}
