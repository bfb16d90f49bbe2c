//! Business logic services

pub mod bmi;
pub mod export;
