use super::super::domain::{Dimension, SubDimension};
use super::super::scoring::Portrait;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DistributionEntry {
    pub sub_dimension: SubDimension,
    pub label: &'static str,
    pub score: u32,
    pub max_score: u32,
    pub percentage: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionDistribution {
    pub dimension: Dimension,
    pub dimension_label: &'static str,
    pub entries: Vec<DistributionEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub portrait: Portrait,
    pub portrait_label: &'static str,
    pub answered: u32,
    pub dimensions: Vec<DimensionDistribution>,
}

/// Job-to-be-done work structures the narrative matches profiles against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    CoreFunctional,
    RelationalExtension,
    EmotionalSocial,
    ConsumptionSupport,
    PurchaseDecision,
}

impl WorkType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::CoreFunctional,
            Self::RelationalExtension,
            Self::EmotionalSocial,
            Self::ConsumptionSupport,
            Self::PurchaseDecision,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CoreFunctional => "核心功能型工作",
            Self::RelationalExtension => "关联扩展型工作",
            Self::EmotionalSocial => "情感与社会型工作",
            Self::ConsumptionSupport => "消费支持型工作",
            Self::PurchaseDecision => "购买决策型工作",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::CoreFunctional => {
                "专业技术岗位（工程、研究、设计、分析）、一线执行岗位、明确目标、明确交付的任务"
            }
            Self::RelationalExtension => "项目管理（PM）、产品设计 / 服务设计、系统搭建、流程优化",
            Self::EmotionalSocial => "团队管理 / 领导岗位、对外沟通、公共事务、教育、辅导、社群角色",
            Self::ConsumptionSupport => {
                "运维、支持、后台管理、教育培训、长期陪伴、体系维护、持续改进"
            }
            Self::PurchaseDecision => "负责人 / 决策者、投资、预算、资源配置、项目立项、采购决策",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkTypeEntry {
    pub work_type: WorkType,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardDistributionEntry {
    pub label: &'static str,
    pub percentage: u32,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionCard {
    pub dimension: Dimension,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub summary: String,
    pub distribution: Vec<CardDistributionEntry>,
    pub application_tip: String,
    pub structure_hint: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportNarrative {
    pub heading: &'static str,
    pub portrait: &'static str,
    pub tagline: &'static str,
    pub work_types: Vec<WorkTypeEntry>,
    pub dimension_cards: Vec<DimensionCard>,
    pub fit_guidance: Vec<String>,
    pub risk_alerts: Vec<String>,
    pub closing: &'static str,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<&'static str>,
}
