//! Household electricity KPIs and rule-based efficiency recommendations.
//!
//! The [`core`] module is the calculation engine: it turns an appliance
//! inventory into energy, cost and CO2 figures and ranks candidate efficiency
//! measures. It is pure and holds no state. [`household`] is the caller side:
//! it reads and validates the household file before anything reaches the engine.

#![allow(clippy::doc_markdown)]

pub mod cli;
pub mod core;
pub mod household;
pub mod prelude;
pub mod quantity;
pub mod tables;
