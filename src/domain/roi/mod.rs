//! ROI module - pure calculation engine.
//!
//! # Components
//!
//! - `RoiCalculator` - Failure cost, service cost, savings, ROI and banding
//! - `AggregatedMetrics` - Sums across the calculable analyses of a list
//!
//! All functions are pure and total: the same inputs always produce the same
//! outputs, and invalid inputs produce 0 rather than an error.

mod aggregation;
mod calculator;

pub use aggregation::AggregatedMetrics;
pub use calculator::{AnalysisMetrics, RoiBand, RoiCalculator, ROI_POSITIVE_THRESHOLD};
