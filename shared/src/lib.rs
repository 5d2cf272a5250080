//! BMI Calculator Shared Library
//!
//! This crate contains the calculation core (BMI engine and body-type
//! classifier) together with the types and validators shared by the
//! backend and WASM modules.

pub mod bmi;
pub mod body_type;
pub mod errors;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use bmi::{classify_bmi, compute_bmi, BmiCategory, BmiMeasurement, Recommendations};
pub use body_type::{
    determine_body_type, score_answers, BodyType, BodyTypeProfile, BodyTypeScores, QuizAnswers,
    Shoulders, Waist, WeightGainPattern,
};
pub use errors::*;
pub use units::*;
