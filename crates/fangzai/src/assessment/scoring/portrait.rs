use super::super::domain::SubDimension;
use super::Scores;
use serde::Serialize;

/// Motivation axis: intrinsic vs extrinsic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Internal,
    External,
}

/// Cognition axis: systematic vs intuitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cognition {
    Systematic,
    Intuitive,
}

/// One-line summary label of a respondent's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Portrait {
    SelfDrivenExpert,
    InnerPioneer,
    OrderAchiever,
    ResultsDoer,
}

impl Portrait {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::SelfDrivenExpert,
            Self::InnerPioneer,
            Self::OrderAchiever,
            Self::ResultsDoer,
        ]
    }

    pub const fn from_axes(orientation: Orientation, cognition: Cognition) -> Self {
        match (orientation, cognition) {
            (Orientation::Internal, Cognition::Systematic) => Self::SelfDrivenExpert,
            (Orientation::Internal, Cognition::Intuitive) => Self::InnerPioneer,
            (Orientation::External, Cognition::Systematic) => Self::OrderAchiever,
            (Orientation::External, Cognition::Intuitive) => Self::ResultsDoer,
        }
    }

    pub const fn orientation(self) -> Orientation {
        match self {
            Self::SelfDrivenExpert | Self::InnerPioneer => Orientation::Internal,
            Self::OrderAchiever | Self::ResultsDoer => Orientation::External,
        }
    }

    pub const fn cognition(self) -> Cognition {
        match self {
            Self::SelfDrivenExpert | Self::OrderAchiever => Cognition::Systematic,
            Self::InnerPioneer | Self::ResultsDoer => Cognition::Intuitive,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SelfDrivenExpert => "严谨深耕的自驱型专家",
            Self::InnerPioneer => "灵动敏锐的内在开拓者",
            Self::OrderAchiever => "稳健务实的秩序达成者",
            Self::ResultsDoer => "高效灵活的结果实干家",
        }
    }
}

/// Ties on either axis fall to the external / intuitive side.
pub fn classify_portrait(scores: &Scores) -> Portrait {
    let orientation = if scores.get(SubDimension::IntrinsicMotivation)
        > scores.get(SubDimension::ExtrinsicMotivation)
    {
        Orientation::Internal
    } else {
        Orientation::External
    };

    let cognition = if scores.get(SubDimension::SystematicCognition)
        > scores.get(SubDimension::IntuitiveCognition)
    {
        Cognition::Systematic
    } else {
        Cognition::Intuitive
    };

    Portrait::from_axes(orientation, cognition)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(SubDimension, u32)]) -> Scores {
        pairs.iter().copied().collect()
    }

    #[test]
    fn empty_scores_fall_to_external_intuitive() {
        let portrait = classify_portrait(&Scores::new());
        assert_eq!(portrait, Portrait::ResultsDoer);
        assert_eq!(portrait.label(), "高效灵活的结果实干家");
    }

    #[test]
    fn strict_majorities_select_each_quadrant() {
        let cases = [
            (3, 1, 4, 1, Portrait::SelfDrivenExpert),
            (3, 1, 1, 4, Portrait::InnerPioneer),
            (1, 3, 4, 1, Portrait::OrderAchiever),
            (1, 3, 1, 4, Portrait::ResultsDoer),
        ];

        for (intrinsic, extrinsic, systematic, intuitive, expected) in cases {
            let scores = scores(&[
                (SubDimension::IntrinsicMotivation, intrinsic),
                (SubDimension::ExtrinsicMotivation, extrinsic),
                (SubDimension::SystematicCognition, systematic),
                (SubDimension::IntuitiveCognition, intuitive),
            ]);
            assert_eq!(classify_portrait(&scores), expected);
        }
    }

    #[test]
    fn ties_break_toward_external_and_intuitive() {
        let tied_orientation = scores(&[
            (SubDimension::IntrinsicMotivation, 4),
            (SubDimension::ExtrinsicMotivation, 4),
            (SubDimension::SystematicCognition, 3),
        ]);
        assert_eq!(classify_portrait(&tied_orientation), Portrait::OrderAchiever);

        let tied_cognition = scores(&[
            (SubDimension::IntrinsicMotivation, 5),
            (SubDimension::SystematicCognition, 2),
            (SubDimension::IntuitiveCognition, 2),
        ]);
        assert_eq!(classify_portrait(&tied_cognition), Portrait::InnerPioneer);
    }

    #[test]
    fn axes_round_trip_through_labels() {
        for portrait in Portrait::ordered() {
            assert_eq!(
                Portrait::from_axes(portrait.orientation(), portrait.cognition()),
                portrait
            );
        }
    }
}
