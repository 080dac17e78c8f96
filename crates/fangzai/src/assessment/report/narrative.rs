use super::super::domain::{Dimension, SubDimension};
use super::super::scoring::{
    classify_portrait, group_distribution, rank_sub_dimensions, resolve_bias, Bias, Scores,
};
use super::views::{
    CardDistributionEntry, DimensionCard, ReportNarrative, WorkType, WorkTypeEntry,
};
use SubDimension::*;

pub(crate) const HEADING: &str = "职业成长路径行动画像";
pub(crate) const TAGLINE: &str = "此亦为您倾向的工作人格，用于判断适合的结构与风险";
pub(crate) const CLOSING: &str =
    "与其频繁调整方向，不如围绕核心优势与长期诉求逐步优化路径。清楚自己“为什么而做”，往往比“现在做什么”更重要。";

pub(crate) const REFERENCES: [&str; 5] = [
    "职业目标：Seibert S. E., Kraimer L., Holtom B. C. & Pierotti A. J. (2013). Even the best laidplans sometimes go askew：Career self-management processes, career shocks, and the decision to pursue graduate education. Journal of Applied Psychology, 98(1),169-182.",
    "行为偏好与策略导向：Sagiv L., Arieli S., Goldenberg J. & Goldschmidt A. (2010). Structure and freedom in creativity：The interplay between externally imposed structure and personal cognitive style. Journal of Organizational Behavior, 31(8), 1086-1110.",
    "学习与知识导向：Baum J. R., Bird B. J. & Singh S. (2011). The practical intelligence of entrepreneurs：Antecedents and a link with new venture growth. Personnel Psychology, 64(2), 397-425.",
    "文化氛围与价值观：Meyer J. P., Irving P. G. & Allen N. J. (1998). Examination of the combined effects",
    "自我：侯烜方，李燕萍，涂乙冬，新生代工作价值观结构、测量及对绩效影响，心理学报，2014，46(6):823-840. | England, G. W, Personal values systems of American managers, Academy of Management Journal, 1967(10):107-117. | Meglino, B, M,, Ravlin, E.C,, Adkins, C,L. A work values approach to corporate culture: a fieldtest of the value congruence process and its relationship to individual outcomes. Journal of Applied Psychology，1989，74(3):424-432.",
];

/// Top entries of each multi-member group, shared by the cards and the guidance.
struct Leaders {
    learning: Vec<SubDimension>,
    culture: SubDimension,
    self_values: SubDimension,
}

impl Leaders {
    fn from_scores(scores: &Scores) -> Self {
        let learning = rank_sub_dimensions(scores, Dimension::LearningOrientation.sub_dimensions());
        let culture = rank_sub_dimensions(scores, Dimension::CulturalValues.sub_dimensions())[0];
        let self_values = rank_sub_dimensions(scores, Dimension::SelfValues.sub_dimensions())[0];

        Self {
            learning,
            culture,
            self_values,
        }
    }

    fn learning_top(&self) -> SubDimension {
        self.learning[0]
    }
}

pub(crate) fn generate_narrative(scores: &Scores) -> ReportNarrative {
    let leaders = Leaders::from_scores(scores);

    let dimension_cards = vec![
        career_card(scores),
        bias_card(scores),
        learning_card(scores, &leaders),
        culture_card(scores, &leaders),
        self_card(scores, &leaders),
    ];

    let work_types = WorkType::ordered()
        .into_iter()
        .map(|work_type| WorkTypeEntry {
            work_type,
            label: work_type.label(),
            description: work_type.description(),
        })
        .collect();

    ReportNarrative {
        heading: HEADING,
        portrait: classify_portrait(scores).label(),
        tagline: TAGLINE,
        work_types,
        dimension_cards,
        fit_guidance: fit_guidance(scores, &leaders),
        risk_alerts: risk_alerts(scores, &leaders),
        closing: CLOSING,
        references: REFERENCES.to_vec(),
    }
}

fn card_distribution(scores: &Scores, dimension: Dimension) -> Vec<CardDistributionEntry> {
    group_distribution(scores, dimension.sub_dimensions())
        .into_iter()
        .map(|share| CardDistributionEntry {
            label: share.sub_dimension.label(),
            percentage: share.percentage,
            description: share.sub_dimension.description(),
        })
        .collect()
}

fn career_card(scores: &Scores) -> DimensionCard {
    let intrinsic = resolve_bias(scores, ExtrinsicMotivation, IntrinsicMotivation)
        .is_toward(IntrinsicMotivation);

    let driver = if intrinsic {
        "成长感 / 兴趣"
    } else {
        "高回报 / 认可"
    };
    let focus = if intrinsic {
        "长期成长空间"
    } else {
        "明确的激励反馈"
    };

    let structure_hint = if intrinsic {
        format!(
            "{}：您的偏好会被放大，因为您更关注事情本身的价值；但在{}中，您可能因过度关注理想而忽略成本风险。",
            WorkType::CoreFunctional.label(),
            WorkType::PurchaseDecision.label()
        )
    } else {
        format!(
            "{}：您的偏好会被放大，因为您对回报和风险敏感；但在{}中，若缺乏即时反馈，您的动力可能会受限。",
            WorkType::PurchaseDecision.label(),
            WorkType::CoreFunctional.label()
        )
    };

    DimensionCard {
        dimension: Dimension::CareerManagement,
        title: "职业管理动机",
        subtitle: "动力来源：外部回报 ↔ 内在满足",
        summary: format!(
            "在工作环境中，你更容易被【{driver}】驱动，这会直接影响你对工作的选择和坚持程度。"
        ),
        distribution: card_distribution(scores, Dimension::CareerManagement),
        application_tip: format!("应围绕【{focus}】进行职业规划。"),
        structure_hint,
    }
}

fn bias_card(scores: &Scores) -> DimensionCard {
    let systematic = resolve_bias(scores, SystematicCognition, IntuitiveCognition)
        .is_toward(SystematicCognition);

    let reliance = if systematic {
        "结构化分析"
    } else {
        "快速判断与感觉"
    };
    let role = if systematic {
        "秩序维护者"
    } else {
        "变局响应者"
    };

    let structure_hint = if systematic {
        format!(
            "{}或{}：您的优势会被放大，因为您擅长严谨规划；但在{}这种需要高度协同的结构中，风险会提高。",
            WorkType::CoreFunctional.label(),
            WorkType::PurchaseDecision.label(),
            WorkType::RelationalExtension.label()
        )
    } else {
        format!(
            "{}或{}：您的优势会被放大，因为您反应敏锐且灵活；但在{}这种需要严密逻辑的结构中，风险会提高。",
            WorkType::RelationalExtension.label(),
            WorkType::EmotionalSocial.label(),
            WorkType::PurchaseDecision.label()
        )
    };

    DimensionCard {
        dimension: Dimension::BehavioralBias,
        title: "行为偏好与策略导向",
        subtitle: "决策方式：系统规划型 ↔ 直觉反应型",
        summary: format!("在工作环境中，你在面对问题时，更依赖【{reliance}】。"),
        distribution: card_distribution(scores, Dimension::BehavioralBias),
        application_tip: format!("你通常是团队中的【{role}】。"),
        structure_hint,
    }
}

fn learning_card(scores: &Scores, leaders: &Leaders) -> DimensionCard {
    let top = leaders.learning_top();
    let runner_up = leaders.learning[1];

    let advice = match top {
        ConcreteExperience => "您更适合在实战中学习，通过解决具体问题来掌握新技能。",
        ActiveExperimentation => "您更适合探索性学习，通过实验和试错来发现规律。",
        AbstractConceptualization => "您更适合系统性学习，通过阅读理论和逻辑推演来构建知识体系。",
        _ => "您更适合观察式学习，通过复盘和深度思考来提炼经验。",
    };

    let structure_hint = match top {
        ConcreteExperience => format!(
            "{}：您的实干能力是核心优势，能通过实际产出快速建立壁垒。",
            WorkType::CoreFunctional.label()
        ),
        ActiveExperimentation => format!(
            "{}：您的探索精神能带动系统创新，适配多变的项目环境。",
            WorkType::RelationalExtension.label()
        ),
        AbstractConceptualization => format!(
            "{}：您的逻辑分析能有效控制风险，在复杂决策中保持清醒。",
            WorkType::PurchaseDecision.label()
        ),
        _ => format!(
            "{}：您的细致观察能提升服务质量，在长期运维中发现优化点。",
            WorkType::ConsumptionSupport.label()
        ),
    };

    DimensionCard {
        dimension: Dimension::LearningOrientation,
        title: "学习与知识导向",
        subtitle: "成长方式：四象限分布",
        summary: format!("在工作环境中，你的学习优势集中在「{top} + {runner_up}」的组合。"),
        distribution: card_distribution(scores, Dimension::LearningOrientation),
        application_tip: format!(
            "针对您的学习风格建议：换对方式比更努力重要。由于您的主导学习方式是「{top}」，建议在适配的学习情境中积累能力。{advice}"
        ),
        structure_hint,
    }
}

fn culture_card(scores: &Scores, leaders: &Leaders) -> DimensionCard {
    let top = leaders.culture;

    let intolerable = match top {
        ComfortAndSecurity => "环境动荡/不稳定",
        CompetenceAndGrowth => "技能停滞/无成长",
        _ => "缺乏尊重/无话语权",
    };

    let advice = match top {
        ComfortAndSecurity => "您在稳定的环境中表现更佳，应避开高风险、高波动的初创型组织。",
        CompetenceAndGrowth => "您需要不断的智力刺激，应选择重视培训和技术深耕的专业型组织。",
        _ => "您有较强的管理和独立诉求，应选择扁平化或提供明确晋升路径的组织。",
    };

    let structure_hint = match top {
        ComfortAndSecurity => format!(
            "{}：您的稳健是长期运维的保障；但在高竞争结构中，您的偏好会被抑制。",
            WorkType::ConsumptionSupport.label()
        ),
        CompetenceAndGrowth => format!(
            "{}：您的成长诉求与专业深耕高度适配，能获得极高的职业成就感。",
            WorkType::CoreFunctional.label()
        ),
        _ => format!(
            "{}：您的领导力潜质能获得更好的发挥空间，通过影响力驱动团队。",
            WorkType::EmotionalSocial.label()
        ),
    };

    DimensionCard {
        dimension: Dimension::CulturalValues,
        title: "文化氛围与价值观",
        subtitle: "核心环境诉求分布",
        summary: format!("在工作环境中，你更难忍受【{intolerable}】的工作环境。"),
        distribution: card_distribution(scores, Dimension::CulturalValues),
        application_tip: format!(
            "针对您的文化诉求建议：优先评估组织文化是否支持您的核心诉求「{top}」。{advice} 避免价值观冲突带来的内耗。"
        ),
        structure_hint,
    }
}

fn self_card(scores: &Scores, leaders: &Leaders) -> DimensionCard {
    let top = leaders.self_values;

    let advice = match top {
        Utilitarian => "您是非常务实的执行者，建议选择绩效导向明确、回报丰厚的行业。",
        IntrinsicPreference => "您的动力源于热爱，建议将职业与个人兴趣深度结合，避免枯燥的重复性劳动。",
        InterpersonalHarmony => "团队氛围对您至关重要，建议在入职前深度考察团队文化，避开高内耗环境。",
        Innovation => "您讨厌平庸，应选择鼓励创新、允许试错的关联扩展型或研发型岗位。",
        _ => "您是长期主义者，应选择有深厚底蕴、能提供长期发展确定性的平台。",
    };

    let structure_hint = match top {
        Innovation => format!(
            "{}：您的突破性思维是适配的利器，能解决非标准化的复杂问题。",
            WorkType::RelationalExtension.label()
        ),
        InterpersonalHarmony => format!(
            "{}：您的亲和力能极大提高团队凝聚力，是组织润滑剂。",
            WorkType::EmotionalSocial.label()
        ),
        Utilitarian => format!(
            "{}：您的务实能确保投入产出比，在资源配置中表现卓越。",
            WorkType::PurchaseDecision.label()
        ),
        _ => format!(
            "{}：您的远见有助于建立持久的体系，在长期主义中获得回报。",
            WorkType::ConsumptionSupport.label()
        ),
    };

    DimensionCard {
        dimension: Dimension::SelfValues,
        title: "自我取向",
        subtitle: "主导驱动力分布",
        summary: format!(
            "在工作环境中，当你的主导驱动力【{top}】长期得不到满足，即使其他条件不错，你也会逐渐失去动力。"
        ),
        distribution: card_distribution(scores, Dimension::SelfValues),
        application_tip: format!(
            "针对您的自我驱动建议：围绕核心优势「{top}」逐步优化路径。{advice} 清楚自己“为什么而做”是保持长期动力的关键。"
        ),
        structure_hint,
    }
}

// A balanced cognition axis takes the systematic phrasing here, unlike the portrait.
fn leans_intuitive(scores: &Scores) -> bool {
    resolve_bias(scores, SystematicCognition, IntuitiveCognition) == Bias::Toward(IntuitiveCognition)
}

fn fit_guidance(scores: &Scores, leaders: &Leaders) -> Vec<String> {
    let trait_label = if leans_intuitive(scores) {
        "灵活应变"
    } else {
        "严谨分析"
    };
    let structure = match leaders.learning_top() {
        ActiveExperimentation | ConcreteExperience => "关联扩展型",
        _ => "核心功能型",
    };

    vec![
        format!("适合能够发挥「{trait_label}」特质的岗位，在「{structure}」结构中表现更佳。"),
        format!(
            "在需要「{}」作为核心驱动的环境中，您的长期投入度和稳定性将达到峰值。",
            leaders.self_values
        ),
        format!(
            "匹配「{}」导向的组织文化，能极大降低您的心理内耗，提升行动效能。",
            leaders.culture
        ),
    ]
}

fn risk_alerts(scores: &Scores, leaders: &Leaders) -> Vec<String> {
    let (structure, style) = if leans_intuitive(scores) {
        ("购买决策型", "直觉导向")
    } else {
        ("关联扩展型", "系统规划")
    };

    vec![
        format!("若处于「{structure}」结构，您的「{style}」可能会因环境错配而导致决策风险或沟通成本增加。"),
        format!(
            "长期在缺乏「{}」支持的结构中行动，会显著提高您的职业倦怠风险，影响专业产出。",
            leaders.culture
        ),
        format!(
            "过度关注短期外部期待，可能会牺牲基于「{}」的长期发展路径，导致中后期动力不足。",
            leaders.self_values
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(SubDimension, u32)]) -> Scores {
        pairs.iter().copied().collect()
    }

    #[test]
    fn empty_scores_produce_a_complete_narrative() {
        let narrative = generate_narrative(&Scores::new());

        assert_eq!(narrative.portrait, "高效灵活的结果实干家");
        assert_eq!(narrative.dimension_cards.len(), 5);
        assert_eq!(narrative.work_types.len(), 5);
        assert_eq!(narrative.fit_guidance.len(), 3);
        assert_eq!(narrative.risk_alerts.len(), 3);

        // all groups tied at zero: first listed member leads
        let learning = &narrative.dimension_cards[2];
        assert!(learning.summary.contains("「具体经验 + 主动尝试」"));
        assert!(narrative.fit_guidance[0].contains("「严谨分析」"));
        assert!(narrative.fit_guidance[0].contains("「关联扩展型」"));
        assert!(narrative.fit_guidance[2].contains("「舒适度安全性」"));
        assert!(narrative.risk_alerts[2].contains("「功利导向」"));
    }

    #[test]
    fn intrinsic_and_systematic_profiles_pick_matching_phrasing() {
        let narrative = generate_narrative(&scores(&[
            (IntrinsicMotivation, 7),
            (ExtrinsicMotivation, 2),
            (SystematicCognition, 4),
            (IntuitiveCognition, 1),
        ]));

        let career = &narrative.dimension_cards[0];
        assert!(career.summary.contains("【成长感 / 兴趣】"));
        assert!(career.application_tip.contains("长期成长空间"));
        assert!(career.structure_hint.starts_with("核心功能型工作："));

        let bias = &narrative.dimension_cards[1];
        assert!(bias.summary.contains("【结构化分析】"));
        assert!(bias.application_tip.contains("秩序维护者"));
        assert_eq!(bias.distribution[0].percentage, 80);
        assert_eq!(bias.distribution[1].percentage, 20);

        assert_eq!(narrative.portrait, "严谨深耕的自驱型专家");
    }

    #[test]
    fn intuitive_lean_switches_guidance_and_risks() {
        let narrative = generate_narrative(&scores(&[
            (IntuitiveCognition, 3),
            (AbstractConceptualization, 4),
            (StatusAndIndependence, 6),
            (Innovation, 5),
        ]));

        assert!(narrative.fit_guidance[0].contains("「灵活应变」"));
        assert!(narrative.fit_guidance[0].contains("「核心功能型」"));
        assert!(narrative.risk_alerts[0].contains("「购买决策型」"));
        assert!(narrative.risk_alerts[0].contains("「直觉导向」"));

        let culture = &narrative.dimension_cards[3];
        assert!(culture.summary.contains("缺乏尊重/无话语权"));
        assert!(culture.structure_hint.starts_with("情感与社会型工作："));

        let self_values = &narrative.dimension_cards[4];
        assert!(self_values.summary.contains("【创新导向】"));
        assert!(self_values.structure_hint.starts_with("关联扩展型工作："));
    }

    #[test]
    fn reflective_learners_get_observation_advice() {
        let narrative = generate_narrative(&scores(&[(ReflectiveObservation, 5)]));
        let learning = &narrative.dimension_cards[2];

        assert!(learning.application_tip.contains("「反思性观察」"));
        assert!(learning.application_tip.contains("观察式学习"));
        assert!(learning.structure_hint.starts_with("消费支持型工作："));
    }
}
