use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Question id to the selection token the respondent chose.
pub type AnswerMap = BTreeMap<u32, String>;

/// Top-level axis measured by the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    CareerManagement,
    BehavioralBias,
    LearningOrientation,
    CulturalValues,
    SelfValues,
}

impl Dimension {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::CareerManagement,
            Self::BehavioralBias,
            Self::LearningOrientation,
            Self::CulturalValues,
            Self::SelfValues,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CareerManagement => "职业管理",
            Self::BehavioralBias => "行为偏好",
            Self::LearningOrientation => "学习取向",
            Self::CulturalValues => "文化价值",
            Self::SelfValues => "自我取向",
        }
    }

    /// Reporting group for the dimension, in report order.
    pub const fn sub_dimensions(self) -> &'static [SubDimension] {
        use SubDimension::*;
        match self {
            Self::CareerManagement => &[ExtrinsicMotivation, IntrinsicMotivation],
            Self::BehavioralBias => &[SystematicCognition, IntuitiveCognition],
            Self::LearningOrientation => &[
                ConcreteExperience,
                ActiveExperimentation,
                AbstractConceptualization,
                ReflectiveObservation,
            ],
            Self::CulturalValues => &[
                ComfortAndSecurity,
                CompetenceAndGrowth,
                StatusAndIndependence,
            ],
            Self::SelfValues => &[
                Utilitarian,
                IntrinsicPreference,
                InterpersonalHarmony,
                Innovation,
                LongTermDevelopment,
            ],
        }
    }
}

/// Finer-grained label that accumulates score. Serialized as its Chinese label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubDimension {
    #[serde(rename = "外在激励")]
    ExtrinsicMotivation,
    #[serde(rename = "内在激励")]
    IntrinsicMotivation,
    #[serde(rename = "系统性认知")]
    SystematicCognition,
    #[serde(rename = "直觉型认知")]
    IntuitiveCognition,
    #[serde(rename = "具体经验")]
    ConcreteExperience,
    #[serde(rename = "主动尝试")]
    ActiveExperimentation,
    #[serde(rename = "抽象概念化")]
    AbstractConceptualization,
    #[serde(rename = "反思性观察")]
    ReflectiveObservation,
    #[serde(rename = "舒适度安全性")]
    ComfortAndSecurity,
    #[serde(rename = "能力与成长")]
    CompetenceAndGrowth,
    #[serde(rename = "地位与独立性")]
    StatusAndIndependence,
    #[serde(rename = "功利导向")]
    Utilitarian,
    #[serde(rename = "内在偏好")]
    IntrinsicPreference,
    #[serde(rename = "人际和谐")]
    InterpersonalHarmony,
    #[serde(rename = "创新导向")]
    Innovation,
    #[serde(rename = "长期发展")]
    LongTermDevelopment,
}

impl SubDimension {
    pub const fn ordered() -> [Self; 16] {
        [
            Self::ExtrinsicMotivation,
            Self::IntrinsicMotivation,
            Self::SystematicCognition,
            Self::IntuitiveCognition,
            Self::ConcreteExperience,
            Self::ActiveExperimentation,
            Self::AbstractConceptualization,
            Self::ReflectiveObservation,
            Self::ComfortAndSecurity,
            Self::CompetenceAndGrowth,
            Self::StatusAndIndependence,
            Self::Utilitarian,
            Self::IntrinsicPreference,
            Self::InterpersonalHarmony,
            Self::Innovation,
            Self::LongTermDevelopment,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ExtrinsicMotivation => "外在激励",
            Self::IntrinsicMotivation => "内在激励",
            Self::SystematicCognition => "系统性认知",
            Self::IntuitiveCognition => "直觉型认知",
            Self::ConcreteExperience => "具体经验",
            Self::ActiveExperimentation => "主动尝试",
            Self::AbstractConceptualization => "抽象概念化",
            Self::ReflectiveObservation => "反思性观察",
            Self::ComfortAndSecurity => "舒适度安全性",
            Self::CompetenceAndGrowth => "能力与成长",
            Self::StatusAndIndependence => "地位与独立性",
            Self::Utilitarian => "功利导向",
            Self::IntrinsicPreference => "内在偏好",
            Self::InterpersonalHarmony => "人际和谐",
            Self::Innovation => "创新导向",
            Self::LongTermDevelopment => "长期发展",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ordered()
            .into_iter()
            .find(|sub_dimension| sub_dimension.label() == label)
    }

    pub const fn dimension(self) -> Dimension {
        match self {
            Self::ExtrinsicMotivation | Self::IntrinsicMotivation => Dimension::CareerManagement,
            Self::SystematicCognition | Self::IntuitiveCognition => Dimension::BehavioralBias,
            Self::ConcreteExperience
            | Self::ActiveExperimentation
            | Self::AbstractConceptualization
            | Self::ReflectiveObservation => Dimension::LearningOrientation,
            Self::ComfortAndSecurity | Self::CompetenceAndGrowth | Self::StatusAndIndependence => {
                Dimension::CulturalValues
            }
            Self::Utilitarian
            | Self::IntrinsicPreference
            | Self::InterpersonalHarmony
            | Self::Innovation
            | Self::LongTermDevelopment => Dimension::SelfValues,
        }
    }

    /// One-line behavioral description shown next to the distribution.
    pub const fn description(self) -> &'static str {
        match self {
            Self::ExtrinsicMotivation => "关注薪酬、职位、社会地位及他人的显性认可。",
            Self::IntrinsicMotivation => "关注工作本身的趣味、个人成长空间及自我价值实现。",
            Self::SystematicCognition => "依赖逻辑推演、详尽规划和风险控制，追求秩序感。",
            Self::IntuitiveCognition => "依赖快速反应、直觉捕捉机会和灵活应变，追求效能。",
            Self::ConcreteExperience => "通过实际操作和亲身体验来巩固知识。",
            Self::ActiveExperimentation => "通过实验探索和不断试错来获取新知。",
            Self::AbstractConceptualization => "通过逻辑思考、理论分析来理解系统。",
            Self::ReflectiveObservation => "通过仔细观察和深度反思来改进策略。",
            Self::ComfortAndSecurity => "追求稳定保障、明确规则和舒适的物理环境。",
            Self::CompetenceAndGrowth => "追求智力挑战、个人技能提升和社会贡献。",
            Self::StatusAndIndependence => "追求管理职责、独立决策权和显赫的社会地位。",
            Self::Utilitarian => "追求物质回报与付出的等价交换。",
            Self::IntrinsicPreference => "追求工作内容与个人兴趣的高度契合。",
            Self::InterpersonalHarmony => "追求平等、尊重且融洽的团队氛围。",
            Self::Innovation => "追求多样性，讨厌墨守成规的挑战。",
            Self::LongTermDevelopment => "追求组织及个人的长远晋升与发展空间。",
        }
    }
}

impl fmt::Display for SubDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One selectable answer of a question.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub sub_dimension: SubDimension,
    pub token: &'static str,
}

/// Forced-choice question. Ids are unique and follow presentation order.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: u32,
    pub dimension: Dimension,
    pub text: &'static str,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option(&self, token: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.token == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sub_dimension_belongs_to_its_dimension_group() {
        for sub_dimension in SubDimension::ordered() {
            assert!(sub_dimension
                .dimension()
                .sub_dimensions()
                .contains(&sub_dimension));
        }

        let grouped: usize = Dimension::ordered()
            .iter()
            .map(|dimension| dimension.sub_dimensions().len())
            .sum();
        assert_eq!(grouped, 16);
    }

    #[test]
    fn labels_round_trip_through_lookup() {
        assert_eq!(
            SubDimension::from_label("抽象概念化"),
            Some(SubDimension::AbstractConceptualization)
        );
        assert_eq!(SubDimension::from_label(" 长期发展 "), Some(SubDimension::LongTermDevelopment));
        assert_eq!(SubDimension::from_label("平衡"), None);
    }

    #[test]
    fn sub_dimensions_serialize_as_labels() {
        let json = serde_json::to_string(&SubDimension::IntrinsicMotivation).expect("serializes");
        assert_eq!(json, "\"内在激励\"");

        let parsed: SubDimension = serde_json::from_str("\"直觉型认知\"").expect("parses");
        assert_eq!(parsed, SubDimension::IntuitiveCognition);
    }
}
