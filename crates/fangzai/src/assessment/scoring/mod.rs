mod distribution;
mod portrait;
mod ranking;

pub use distribution::{group_distribution, GroupShare};
pub use portrait::{classify_portrait, Cognition, Orientation, Portrait};
pub use ranking::{rank_sub_dimensions, resolve_bias, Bias};

use super::catalog::QuestionCatalog;
use super::domain::{AnswerMap, SubDimension};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Sparse per-sub-dimension counts. Absent keys read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scores(BTreeMap<SubDimension, u32>);

impl Scores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, sub_dimension: SubDimension) -> u32 {
        self.0.get(&sub_dimension).copied().unwrap_or(0)
    }

    /// Sum of all counts, i.e. the number of answers that scored.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SubDimension, u32)> + '_ {
        self.0.iter().map(|(sub_dimension, score)| (*sub_dimension, *score))
    }

    pub(crate) fn increment(&mut self, sub_dimension: SubDimension) {
        *self.0.entry(sub_dimension).or_insert(0) += 1;
    }
}

impl FromIterator<(SubDimension, u32)> for Scores {
    fn from_iter<T: IntoIterator<Item = (SubDimension, u32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Count one point per answered question toward the chosen option's sub-dimension.
///
/// Questions are visited in catalog order. Unanswered questions and tokens that
/// match none of the question's options contribute nothing.
pub fn tally_scores(catalog: &QuestionCatalog, answers: &AnswerMap) -> Scores {
    let mut scores = Scores::new();

    for question in catalog.questions() {
        let Some(token) = answers.get(&question.id) else {
            continue;
        };

        match question.option(token) {
            Some(option) => scores.increment(option.sub_dimension),
            None => {
                warn!(
                    question_id = question.id,
                    token = token.as_str(),
                    "answer token matches no option; ignoring"
                );
            }
        }
    }

    scores
}
