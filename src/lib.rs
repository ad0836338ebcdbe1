//! BerapaYa - Treatment Cost Estimation Service
//!
//! This crate predicts treatment costs for common disease categories from a
//! cost catalog, compares them with a patient's budget, and lists the
//! hospitals near a given location.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
