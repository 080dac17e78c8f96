//! Question catalog, scoring rules, report building, and the HTTP surface
//! for the Fangzai career assessment.
//!
//! Scoring is a pure function of the catalog and an answer snapshot; quiz
//! sessions and access gating sit on top of it and never feed state back in.

pub mod access;
pub mod answers;
pub mod catalog;
pub mod domain;
pub mod report;
pub mod router;
pub mod scoring;
pub mod session;

pub use access::AccessCodeGate;
pub use answers::{AnswerImportError, AnswerSheetImporter, RespondentAnswers};
pub use catalog::QuestionCatalog;
pub use domain::{AnswerMap, AnswerOption, Dimension, Question, SubDimension};
pub use report::AssessmentReport;
pub use router::{assessment_router, AssessmentState};
pub use scoring::{
    classify_portrait, group_distribution, rank_sub_dimensions, resolve_bias, tally_scores, Bias,
    Cognition, GroupShare, Orientation, Portrait, Scores,
};
pub use session::{QuizSession, QuizStep, SessionError};
