//! Core data models for the tool rental engine.
//!
//! This module contains the domain models shared by the calculation,
//! checkout and API layers.

mod rental_agreement;
mod rental_period;
mod tool;

pub use rental_agreement::RentalAgreement;
pub use rental_period::RentalPeriod;
pub use tool::{ChargePolicy, Tool, ToolType};
