//! Grant Forecast Engine
//!
//! This crate forecasts the salary and fringe cost of employees charged to a
//! grant: it prorates a COLA-adjusted salary over the grant dates and adds
//! percentage fringes and per-period benefit plan costs from a configurable
//! rate schedule.

#![warn(missing_docs)]

pub mod api;
pub mod auth;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
