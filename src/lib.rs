//! HourCalc pay engine
//!
//! This crate splits work shifts into normal and loading (premium) minutes
//! based on time-of-day and day-of-week rules, and aggregates the results
//! into weekly totals and a payable amount.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod persistence;
