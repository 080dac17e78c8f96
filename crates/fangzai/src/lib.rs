//! Scoring engine and service plumbing for the Fangzai career assessment.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
