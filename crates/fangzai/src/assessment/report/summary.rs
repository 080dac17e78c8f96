use super::super::catalog::QuestionCatalog;
use super::super::domain::{AnswerMap, Dimension};
use super::super::scoring::{classify_portrait, group_distribution, tally_scores, Portrait, Scores};
use super::views::{
    AssessmentSummary, DimensionDistribution, DistributionEntry, ReportNarrative,
};

/// Scores and portrait for one respondent, recomputed from a full answer snapshot.
#[derive(Debug, Clone)]
pub struct AssessmentReport {
    pub scores: Scores,
    pub portrait: Portrait,
}

impl AssessmentReport {
    pub fn from_answers(catalog: &QuestionCatalog, answers: &AnswerMap) -> Self {
        Self::from_scores(tally_scores(catalog, answers))
    }

    pub fn from_scores(scores: Scores) -> Self {
        let portrait = classify_portrait(&scores);
        Self { scores, portrait }
    }

    pub fn summary(&self, catalog: &QuestionCatalog) -> AssessmentSummary {
        let dimensions = Dimension::ordered()
            .into_iter()
            .map(|dimension| DimensionDistribution {
                dimension,
                dimension_label: dimension.label(),
                entries: group_distribution(&self.scores, dimension.sub_dimensions())
                    .into_iter()
                    .map(|share| DistributionEntry {
                        sub_dimension: share.sub_dimension,
                        label: share.sub_dimension.label(),
                        score: share.score,
                        max_score: catalog.max_attainable(share.sub_dimension),
                        percentage: share.percentage,
                    })
                    .collect(),
            })
            .collect();

        AssessmentSummary {
            portrait: self.portrait,
            portrait_label: self.portrait.label(),
            answered: self.scores.total(),
            dimensions,
        }
    }

    pub fn narrative(&self) -> ReportNarrative {
        super::generate_narrative(&self.scores)
    }
}
