//! Business logic services

pub mod bmi;
pub mod body_type;

pub use bmi::BmiService;
pub use body_type::BodyTypeService;
