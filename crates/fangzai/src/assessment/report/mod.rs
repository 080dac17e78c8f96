mod narrative;
mod summary;
pub mod views;

pub use summary::AssessmentReport;

pub(crate) use narrative::generate_narrative;
