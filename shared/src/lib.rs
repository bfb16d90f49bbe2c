//! BMI Health Analyzer Shared Library
//!
//! Pure BMI engine plus the domain and API types shared by the backend and
//! the WASM module. Nothing in this crate performs I/O or holds state.

pub mod advice;
pub mod bmi;
pub mod charts;
pub mod errors;
pub mod models;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use advice::{advice_for, advice_for_label, AdviceSet, AdviceVariant};
pub use bmi::{classify_bmi, compute_bmi, evaluate, BmiResult, Measurement, StatusCategory};
pub use errors::*;
pub use models::{BmiRecord, Gender, PersonDetails};
pub use units::{HeightUnit, WeightUnit};
