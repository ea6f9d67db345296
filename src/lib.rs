//! Argos ROI - Return-on-investment calculator for predictive pump maintenance
//!
//! This crate turns equipment parameters (pump counts, failure rates, wafer
//! economics, downtime costs) into ROI figures for the Argos service, and
//! compares a baseline analysis against a what-if variant.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
