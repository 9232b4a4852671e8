//! # weld_core - Welded Connection Calculation Engine
//!
//! `weld_core` sizes the weld of a lap joint between two steel plates and
//! reports the resulting connection strength and efficiency. All inputs,
//! outputs and errors are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use weld_core::compute_joint;
//!
//! // 500 kN through 10 mm and 12 mm plates, 200 mm wide
//! let result = compute_joint(500.0, 200.0, 10.0, 12.0).unwrap();
//! assert_eq!(result.weld_length_mm, 200);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Lap joint sizing
//! - [`materials`] - Steel grade table
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute_joint, LapJointInput, LapJointResult};
pub use errors::{CalcError, CalcResult};
pub use materials::{MaterialGrade, SteelGrade};
