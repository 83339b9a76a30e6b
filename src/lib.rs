//! Tool Rental Pricing Engine
//!
//! This crate prices tool rentals. Its core counts the chargeable days of a
//! rental window, classifying each day as weekday, weekend or observed
//! holiday and applying the tool's charge policy. Around the core it provides
//! the tool catalog, the checkout workflow that prices a rental agreement,
//! and an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
