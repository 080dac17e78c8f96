use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::access::AccessCodeGate;
use super::catalog::QuestionCatalog;
use super::domain::{AnswerMap, Question, SubDimension};
use super::report::views::{AssessmentSummary, ReportNarrative};
use super::report::AssessmentReport;
use super::scoring::{rank_sub_dimensions, resolve_bias, tally_scores, Bias, Portrait, Scores};
use crate::error::AppError;

/// Shared, read-only inputs for the assessment endpoints.
#[derive(Debug)]
pub struct AssessmentState {
    pub catalog: QuestionCatalog,
    pub gate: AccessCodeGate,
    pub access_required: bool,
}

impl AssessmentState {
    pub fn new(catalog: QuestionCatalog, gate: AccessCodeGate, access_required: bool) -> Self {
        Self {
            catalog,
            gate,
            access_required,
        }
    }

    fn unlocks(&self, access_code: Option<&str>) -> bool {
        !self.access_required || access_code.is_some_and(|code| self.gate.verify(code))
    }
}

pub fn assessment_router(state: Arc<AssessmentState>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route("/api/v1/assessment/scores", post(scores_handler))
        .route("/api/v1/assessment/rank", post(rank_handler))
        .route("/api/v1/assessment/bias", post(bias_handler))
        .route("/api/v1/assessment/report", post(report_handler))
        .route("/api/v1/access/verify", post(verify_handler))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct ScoresRequest {
    #[serde(default)]
    pub answers: AnswerMap,
}

#[derive(Debug, Serialize)]
pub struct ScoresResponse {
    pub scores: Scores,
    pub answered: u32,
    pub portrait: Portrait,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub scores: Scores,
    pub names: Vec<SubDimension>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub ranking: Vec<SubDimension>,
}

#[derive(Debug, Deserialize)]
pub struct BiasRequest {
    #[serde(default)]
    pub scores: Scores,
    pub left: SubDimension,
    pub right: SubDimension,
}

#[derive(Debug, Serialize)]
pub struct BiasResponse {
    pub bias: Bias,
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub answers: AnswerMap,
    #[serde(default)]
    pub access_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub generated_at: DateTime<Utc>,
    pub scores: Scores,
    pub summary: AssessmentSummary,
    pub narrative: ReportNarrative,
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

pub(crate) async fn questions_handler(
    State(state): State<Arc<AssessmentState>>,
) -> Json<Vec<Question>> {
    Json(state.catalog.questions().to_vec())
}

pub(crate) async fn scores_handler(
    State(state): State<Arc<AssessmentState>>,
    Json(request): Json<ScoresRequest>,
) -> Json<ScoresResponse> {
    let report = AssessmentReport::from_answers(&state.catalog, &request.answers);
    debug!(answered = report.scores.total(), portrait = ?report.portrait, "scored answers");

    Json(ScoresResponse {
        answered: report.scores.total(),
        portrait: report.portrait,
        scores: report.scores,
    })
}

pub(crate) async fn rank_handler(Json(request): Json<RankRequest>) -> Json<RankResponse> {
    Json(RankResponse {
        ranking: rank_sub_dimensions(&request.scores, &request.names),
    })
}

pub(crate) async fn bias_handler(Json(request): Json<BiasRequest>) -> Json<BiasResponse> {
    Json(BiasResponse {
        bias: resolve_bias(&request.scores, request.left, request.right),
    })
}

pub(crate) async fn report_handler(
    State(state): State<Arc<AssessmentState>>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<ReportResponse>, AppError> {
    if !state.unlocks(request.access_code.as_deref()) {
        warn!("report requested without a valid access code");
        return Err(AppError::AccessDenied);
    }

    let scores = tally_scores(&state.catalog, &request.answers);
    let report = AssessmentReport::from_scores(scores);

    Ok(Json(ReportResponse {
        generated_at: Utc::now(),
        summary: report.summary(&state.catalog),
        narrative: report.narrative(),
        scores: report.scores,
    }))
}

pub(crate) async fn verify_handler(
    State(state): State<Arc<AssessmentState>>,
    Json(request): Json<VerifyRequest>,
) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        valid: state.gate.verify(&request.code),
    })
}
