#![forbid(unsafe_code)]

//! Core domain model and business logic for the weight change planner.
//!
//! This crate provides:
//! - Domain types (gender, validated input, immutable result)
//! - Input validation
//! - The timeline engine (linear weight and BMI projection)
//! - Presentation policy (BMI bands, pace warnings)
//! - Timeline CSV export, configuration, logging

pub mod types;
pub mod error;
pub mod math;
pub mod validation;
pub mod engine;
pub mod health;
pub mod export;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result, ValidationError, ValidationKind, ValidationResult};
pub use types::*;
pub use engine::calculate;
pub use health::{BmiCategory, PaceThresholds, PaceWarning, Severity};
pub use export::write_timeline_csv;
pub use config::Config;
pub use validation::{
    format_date, parse_date, to_number, validate_date_range, validate_gender, validate_positive,
};
