//! Weekly Wage Engine
//!
//! This crate computes the weekly pay of a single worker from seven daily
//! clock-in/clock-out entries. Each day is priced with a tiered rule (hourly
//! rate below six hours, a flat amount at six hours, flat amount plus hourly
//! rate beyond it) plus an optional fixed surcharge, and the week is summed
//! into a total with an audit trace and a printable report.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
