//! # Connection Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`lap_joint`] - Fillet-welded lap joint in axial tension

pub mod lap_joint;

// Re-export commonly used types
pub use lap_joint::{compute_joint, LapJointInput, LapJointResult};
