//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `analysis` - Analysis aggregate, global parameters and the workspace
//! - `validation` - Per-field validators for raw user input
//! - `roi` - Cost, savings and ROI formulas plus aggregation
//! - `comparison` - What-if sessions and snapshot-based diffing
//! - `formatting` - Currency and percentage rendering

pub mod analysis;
pub mod comparison;
pub mod formatting;
pub mod foundation;
pub mod roi;
pub mod validation;
