//! Structural Steel Plate Grades
//!
//! Yield strengths for the plate grades available to a lap joint design.
//! The grade table is an ordered, immutable `static`; its declaration order
//! is significant because ties in yield strength resolve to the earliest entry.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};
use crate::units::Megapascals;

/// Steel plate grade designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// E250 (fy = 250 MPa)
    E250,
    /// E275 (fy = 275 MPa)
    E275,
    /// E300 (fy = 300 MPa)
    E300,
    /// E350 (fy = 350 MPa)
    E350,
    /// E410 (fy = 410 MPa)
    E410,
}

impl SteelGrade {
    /// All grades in table order
    pub const ALL: [SteelGrade; 5] = [
        SteelGrade::E250,
        SteelGrade::E275,
        SteelGrade::E300,
        SteelGrade::E350,
        SteelGrade::E410,
    ];

    /// Grade designation (e.g., "E250")
    pub fn code(&self) -> &'static str {
        match self {
            SteelGrade::E250 => "E250",
            SteelGrade::E275 => "E275",
            SteelGrade::E300 => "E300",
            SteelGrade::E350 => "E350",
            SteelGrade::E410 => "E410",
        }
    }

    /// Minimum yield strength fy
    pub fn yield_strength(&self) -> Megapascals {
        match self {
            SteelGrade::E250 => Megapascals(250.0),
            SteelGrade::E275 => Megapascals(275.0),
            SteelGrade::E300 => Megapascals(300.0),
            SteelGrade::E350 => Megapascals(350.0),
            SteelGrade::E410 => Megapascals(410.0),
        }
    }

    /// Table entry for this grade
    pub fn properties(&self) -> MaterialGrade {
        MaterialGrade {
            grade: *self,
            yield_strength: self.yield_strength(),
        }
    }

    /// Parse from common string representations ("E250", "e250", "250")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase();
        let code = normalized.strip_prefix('E').unwrap_or(normalized.as_str());
        match code {
            "250" => Ok(SteelGrade::E250),
            "275" => Ok(SteelGrade::E275),
            "300" => Ok(SteelGrade::E300),
            "350" => Ok(SteelGrade::E350),
            "410" => Ok(SteelGrade::E410),
            _ => Err(CalcError::material_not_found(s)),
        }
    }
}

impl FromStr for SteelGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SteelGrade::from_str_flexible(s)
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One row of the grade table: a grade and its yield strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialGrade {
    /// Grade designation
    pub grade: SteelGrade,
    /// Yield strength (MPa)
    pub yield_strength: Megapascals,
}

/// Shipped grade table, in declaration order.
pub static MATERIAL_GRADES: [MaterialGrade; 5] = [
    MaterialGrade { grade: SteelGrade::E250, yield_strength: Megapascals(250.0) },
    MaterialGrade { grade: SteelGrade::E275, yield_strength: Megapascals(275.0) },
    MaterialGrade { grade: SteelGrade::E300, yield_strength: Megapascals(300.0) },
    MaterialGrade { grade: SteelGrade::E350, yield_strength: Megapascals(350.0) },
    MaterialGrade { grade: SteelGrade::E410, yield_strength: Megapascals(410.0) },
];

/// Select the grade with the lowest yield strength.
///
/// Ties resolve to the earliest entry in `table`. Returns `None` for an
/// empty table.
pub fn weakest_grade(table: &[MaterialGrade]) -> Option<&MaterialGrade> {
    let mut weakest: Option<&MaterialGrade> = None;
    for entry in table {
        match weakest {
            // strict comparison keeps the first minimum on ties
            Some(current) if entry.yield_strength.0 >= current.yield_strength.0 => {}
            _ => weakest = Some(entry),
        }
    }
    weakest
}
