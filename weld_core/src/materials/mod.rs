//! # Materials Database
//!
//! Material definitions and property lookups for welded steel connections.
//!
//! ## Example
//!
//! ```rust
//! use weld_core::materials::{weakest_grade, SteelGrade, MATERIAL_GRADES};
//!
//! let governing = weakest_grade(&MATERIAL_GRADES).unwrap();
//! assert_eq!(governing.grade, SteelGrade::E250);
//! println!("fy = {} MPa", governing.yield_strength.value());
//! ```

pub mod steel;

pub use steel::{weakest_grade, MaterialGrade, SteelGrade, MATERIAL_GRADES};
