use fangzai::assessment::{
    AccessCodeGate, AnswerMap, AssessmentState, QuestionCatalog,
};
use fangzai::config::AccessConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn access_gate(config: &AccessConfig) -> AccessCodeGate {
    AccessCodeGate::new(config.extra_codes.iter().cloned())
}

pub(crate) fn assessment_state(config: &AccessConfig) -> Arc<AssessmentState> {
    Arc::new(AssessmentState::new(
        QuestionCatalog::standard(),
        access_gate(config),
        config.required,
    ))
}

/// Deterministic answer sheet used when no file is supplied: odd questions
/// take the first option, even questions the last.
pub(crate) fn sample_answers(catalog: &QuestionCatalog) -> AnswerMap {
    catalog
        .questions()
        .iter()
        .filter_map(|question| {
            let option = if question.id % 2 == 1 {
                question.options.first()
            } else {
                question.options.last()
            }?;
            Some((question.id, option.token.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_answers_cover_every_question() {
        let catalog = QuestionCatalog::standard();
        let answers = sample_answers(&catalog);
        assert_eq!(answers.len(), catalog.len());
        assert!(catalog
            .questions()
            .iter()
            .all(|question| question.option(&answers[&question.id]).is_some()));
    }

    #[test]
    fn assessment_state_carries_access_settings() {
        let state = assessment_state(&AccessConfig {
            required: true,
            extra_codes: vec!["TEAM-ALPHA".to_string()],
        });
        assert!(state.access_required);
        assert!(state.gate.verify("TEAM-ALPHA"));
        assert_eq!(state.catalog.len(), 46);
    }
}
