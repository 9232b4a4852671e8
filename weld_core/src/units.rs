//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## SI Units
//!
//! Weld sizing is carried out in millimetre-newton units:
//! - Length: millimetres (mm)
//! - Area: square millimetres (mm²)
//! - Force: newtons (N), kilonewtons (kN = 1000 N)
//! - Stress: megapascals (MPa = N/mm²)
//! - Line load: newtons per millimetre of weld (N/mm)
//!
//! The cross-unit products follow dimensional analysis, so
//! `N / (mm × MPa)` comes out in mm.
//!
//! ## Example
//!
//! ```rust
//! use weld_core::units::{Kilonewtons, Megapascals, Millimeters, Newtons};
//!
//! let force: Newtons = Kilonewtons(500.0).into();
//! assert_eq!(force.0, 500_000.0);
//!
//! let capacity_per_mm = Millimeters(10.0) * Megapascals(250.0);
//! let length: Millimeters = force / capacity_per_mm;
//! assert_eq!(length.0, 200.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

// ============================================================================
// Length and Area Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimeters(pub f64);

impl Mul for Millimeters {
    type Output = SquareMillimeters;
    fn mul(self, rhs: Millimeters) -> SquareMillimeters {
        SquareMillimeters(self.0 * rhs.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

impl From<Kilonewtons> for Newtons {
    fn from(kn: Kilonewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

// ============================================================================
// Stress and Line Load Units
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Force per unit weld length in newtons per millimetre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonsPerMm(pub f64);

/// mm × N/mm² = N/mm
impl Mul<Megapascals> for Millimeters {
    type Output = NewtonsPerMm;
    fn mul(self, rhs: Megapascals) -> NewtonsPerMm {
        NewtonsPerMm(self.0 * rhs.0)
    }
}

/// mm² × N/mm² = N
impl Mul<Megapascals> for SquareMillimeters {
    type Output = Newtons;
    fn mul(self, rhs: Megapascals) -> Newtons {
        Newtons(self.0 * rhs.0)
    }
}

/// N ÷ N/mm = mm
impl Div<NewtonsPerMm> for Newtons {
    type Output = Millimeters;
    fn div(self, rhs: NewtonsPerMm) -> Millimeters {
        Millimeters(self.0 / rhs.0)
    }
}

// ============================================================================
// Raw Value Access (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_value {
    ($type:ty) => {
        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_value!(Millimeters);
impl_value!(SquareMillimeters);
impl_value!(Newtons);
impl_value!(Kilonewtons);
impl_value!(Megapascals);
impl_value!(NewtonsPerMm);
