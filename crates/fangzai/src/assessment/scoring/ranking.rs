use super::super::domain::SubDimension;
use super::Scores;
use serde::{Serialize, Serializer};
use std::cmp::Reverse;

/// Reorder `names` by descending score. Equal scores keep their input order.
pub fn rank_sub_dimensions(scores: &Scores, names: &[SubDimension]) -> Vec<SubDimension> {
    let mut ranked = names.to_vec();
    // sort_by_key is stable
    ranked.sort_by_key(|sub_dimension| Reverse(scores.get(*sub_dimension)));
    ranked
}

/// Head-to-head comparison between two sub-dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    Toward(SubDimension),
    Balanced,
}

impl Bias {
    pub const BALANCED_LABEL: &'static str = "平衡";

    pub fn label(self) -> &'static str {
        match self {
            Self::Toward(sub_dimension) => sub_dimension.label(),
            Self::Balanced => Self::BALANCED_LABEL,
        }
    }

    pub fn is_toward(self, sub_dimension: SubDimension) -> bool {
        self == Self::Toward(sub_dimension)
    }
}

impl Serialize for Bias {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

pub fn resolve_bias(scores: &Scores, left: SubDimension, right: SubDimension) -> Bias {
    let left_score = scores.get(left);
    let right_score = scores.get(right);

    if left_score > right_score {
        Bias::Toward(left)
    } else if right_score > left_score {
        Bias::Toward(right)
    } else {
        Bias::Balanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SubDimension::*;

    const LEARNING: [SubDimension; 4] = [
        ConcreteExperience,
        ActiveExperimentation,
        AbstractConceptualization,
        ReflectiveObservation,
    ];

    #[test]
    fn ranking_keeps_input_order_on_ties() {
        let scores: Scores = [
            (ConcreteExperience, 3),
            (ActiveExperimentation, 1),
            (AbstractConceptualization, 3),
            (ReflectiveObservation, 0),
        ]
        .into_iter()
        .collect();

        let ranked = rank_sub_dimensions(&scores, &LEARNING);

        assert_eq!(
            ranked,
            vec![
                ConcreteExperience,
                AbstractConceptualization,
                ActiveExperimentation,
                ReflectiveObservation,
            ]
        );
    }

    #[test]
    fn ranking_is_a_descending_permutation() {
        let scores: Scores = [(Innovation, 2), (LongTermDevelopment, 5), (Utilitarian, 2)]
            .into_iter()
            .collect();
        let names = [
            Utilitarian,
            IntrinsicPreference,
            InterpersonalHarmony,
            Innovation,
            LongTermDevelopment,
        ];

        let ranked = rank_sub_dimensions(&scores, &names);

        assert_eq!(ranked.len(), names.len());
        for name in names {
            assert!(ranked.contains(&name));
        }
        assert!(ranked
            .windows(2)
            .all(|pair| scores.get(pair[0]) >= scores.get(pair[1])));
        assert_eq!(
            ranked,
            vec![
                LongTermDevelopment,
                Utilitarian,
                Innovation,
                IntrinsicPreference,
                InterpersonalHarmony,
            ]
        );
    }

    #[test]
    fn empty_scores_leave_order_untouched() {
        assert_eq!(rank_sub_dimensions(&Scores::new(), &LEARNING), LEARNING.to_vec());
    }

    #[test]
    fn bias_is_balanced_only_on_equal_scores() {
        assert_eq!(
            resolve_bias(&Scores::new(), SystematicCognition, IntuitiveCognition),
            Bias::Balanced
        );

        let scores: Scores = [(ExtrinsicMotivation, 2), (IntrinsicMotivation, 5)]
            .into_iter()
            .collect();
        assert_eq!(
            resolve_bias(&scores, ExtrinsicMotivation, IntrinsicMotivation),
            Bias::Toward(IntrinsicMotivation)
        );
        assert_eq!(
            resolve_bias(&scores, IntrinsicMotivation, ExtrinsicMotivation),
            Bias::Toward(IntrinsicMotivation)
        );
        assert_eq!(
            resolve_bias(&scores, ExtrinsicMotivation, SystematicCognition),
            Bias::Toward(ExtrinsicMotivation)
        );
    }

    #[test]
    fn bias_serializes_as_label() {
        assert_eq!(
            serde_json::to_value(Bias::Balanced).expect("serializes"),
            serde_json::json!("平衡")
        );
        assert_eq!(
            serde_json::to_value(Bias::Toward(IntuitiveCognition)).expect("serializes"),
            serde_json::json!("直觉型认知")
        );
    }
}
