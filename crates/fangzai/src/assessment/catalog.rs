use super::domain::{AnswerOption, Dimension, Question, SubDimension};
use std::collections::BTreeSet;

/// Immutable, ordered question bank. Built once and shared by reference.
#[derive(Debug)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// The 46-question battery shipped with the assessment.
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions_for(&self, dimension: Dimension) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.dimension == dimension)
            .collect()
    }

    /// Sub-dimensions reachable from at least one option.
    pub fn sub_dimensions(&self) -> BTreeSet<SubDimension> {
        self.questions
            .iter()
            .flat_map(|question| question.options.iter())
            .map(|option| option.sub_dimension)
            .collect()
    }

    /// Highest score a sub-dimension can reach: the number of options feeding it.
    pub fn max_attainable(&self, sub_dimension: SubDimension) -> u32 {
        self.questions
            .iter()
            .flat_map(|question| question.options.iter())
            .filter(|option| option.sub_dimension == sub_dimension)
            .count() as u32
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn question(
    id: u32,
    dimension: Dimension,
    text: &'static str,
    options: Vec<AnswerOption>,
) -> Question {
    Question {
        id,
        dimension,
        text,
        options,
    }
}

fn option(token: &'static str, label: &'static str, sub_dimension: SubDimension) -> AnswerOption {
    AnswerOption {
        label,
        sub_dimension,
        token,
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        // Career management
        question(
            1,
            Dimension::CareerManagement,
            "如果只能选择一个，你更看重：",
            vec![
                option("A", "在职业中获得经济回报", SubDimension::ExtrinsicMotivation),
                option("B", "在职业生涯中不断学习和成长", SubDimension::IntrinsicMotivation),
            ],
        ),
        question(
            2,
            Dimension::CareerManagement,
            "在职业选择中，你希望：",
            vec![
                option("A", "成为他人眼中的成功人士", SubDimension::ExtrinsicMotivation),
                option("B", "从事有意思的工作", SubDimension::IntrinsicMotivation),
            ],
        ),
        question(
            3,
            Dimension::CareerManagement,
            "如果只能选择一个，你更希望：",
            vec![
                option("A", "在公司里被大家看成是一个能干的人", SubDimension::ExtrinsicMotivation),
                option("B", "通过参与广泛而多样的工作任务获得经验", SubDimension::IntrinsicMotivation),
            ],
        ),
        question(
            4,
            Dimension::CareerManagement,
            "在工作中，你更在乎：",
            vec![
                option("A", "享有高社会地位的职业", SubDimension::ExtrinsicMotivation),
                option("B", "发展自己的技能", SubDimension::IntrinsicMotivation),
            ],
        ),
        question(
            5,
            Dimension::CareerManagement,
            "对你来说，职业中更重要的是：",
            vec![
                option("A", "获得经济回报和认可", SubDimension::ExtrinsicMotivation),
                option("B", "对他人或社会问题产生积极的影响", SubDimension::IntrinsicMotivation),
            ],
        ),
        question(
            6,
            Dimension::CareerManagement,
            "在选择职业时，你更关心：",
            vec![
                option("A", "工作能带来高薪酬", SubDimension::ExtrinsicMotivation),
                option("B", "工作能提供有意思的工作机会", SubDimension::IntrinsicMotivation),
            ],
        ),
        question(
            7,
            Dimension::CareerManagement,
            "如果只能选择一个，你希望：",
            vec![
                option("A", "在职业中被大家看成是成功的人", SubDimension::ExtrinsicMotivation),
                option("B", "通过广泛工作任务获得丰富经验", SubDimension::IntrinsicMotivation),
            ],
        ),
        question(
            8,
            Dimension::CareerManagement,
            "在职业生涯中，你更注重：",
            vec![
                option("A", "获得社会地位和他人尊重", SubDimension::ExtrinsicMotivation),
                option("B", "通过工作不断发展自己的技能", SubDimension::IntrinsicMotivation),
            ],
        ),
        question(
            9,
            Dimension::CareerManagement,
            "对你来说，职业中更重要的是：",
            vec![
                option("A", "经济回报和社会地位", SubDimension::ExtrinsicMotivation),
                option("B", "对社会产生积极影响和工作兴趣", SubDimension::IntrinsicMotivation),
            ],
        ),
        // Behavioral bias and cognitive style
        question(
            10,
            Dimension::BehavioralBias,
            "在面对一个重要决策时，你更倾向于：",
            vec![
                option("A", "仔细规划你的行动方案", SubDimension::SystematicCognition),
                option("B", "追随你的直觉", SubDimension::IntuitiveCognition),
            ],
        ),
        question(
            11,
            Dimension::BehavioralBias,
            "在开展一项新工作前，你会：",
            vec![
                option("A", "收集好所有所需信息", SubDimension::SystematicCognition),
                option("B", "如果感觉某个方式是对的，就认为那个做事方式适合你", SubDimension::IntuitiveCognition),
            ],
        ),
        question(
            12,
            Dimension::BehavioralBias,
            "当你做一些非常重要的工作时，你会：",
            vec![
                option("A", "尽量严格按照你的工作计划行事", SubDimension::SystematicCognition),
                option("B", "通常在没有明确想法的时候先开始做起来", SubDimension::IntuitiveCognition),
            ],
        ),
        question(
            13,
            Dimension::BehavioralBias,
            "在决定如何行动时，你更倾向于：",
            vec![
                option("A", "通过系统的、有序的方式做出决定", SubDimension::SystematicCognition),
                option("B", "遵循内心的感觉和情感", SubDimension::IntuitiveCognition),
            ],
        ),
        question(
            14,
            Dimension::BehavioralBias,
            "当不得不在各种方案之间做出选择时，你会：",
            vec![
                option("A", "分析每个方案，然后选择最好的那个", SubDimension::SystematicCognition),
                option("B", "经常在做了一个好的决策后还不知道自己是怎么做到的", SubDimension::IntuitiveCognition),
            ],
        ),
        // Learning orientation
        question(
            15,
            Dimension::LearningOrientation,
            "学习时，你更喜欢：",
            vec![
                option("A", "边做边学，从实际操作中学习", SubDimension::ConcreteExperience),
                option("B", "做各种尝试和实验", SubDimension::ActiveExperimentation),
            ],
        ),
        question(
            16,
            Dimension::LearningOrientation,
            "学习时，你更倾向于：",
            vec![
                option("A", "从个人经验中学到的最多", SubDimension::ConcreteExperience),
                option("B", "从尝试与实践中学到的最多", SubDimension::ActiveExperimentation),
            ],
        ),
        question(
            17,
            Dimension::LearningOrientation,
            "学习时，你更倾向于：",
            vec![
                option("A", "从实际操作中学习", SubDimension::ConcreteExperience),
                option("B", "通过思考来学习", SubDimension::AbstractConceptualization),
            ],
        ),
        question(
            18,
            Dimension::LearningOrientation,
            "学习时，你更重视：",
            vec![
                option("A", "新的经验和实际操作", SubDimension::ConcreteExperience),
                option("B", "逻辑和评估", SubDimension::AbstractConceptualization),
            ],
        ),
        question(
            19,
            Dimension::LearningOrientation,
            "学习时，你更倾向于：",
            vec![
                option("A", "边做边学，从实际操作中学习", SubDimension::ConcreteExperience),
                option("B", "通过观察别人来学习", SubDimension::ReflectiveObservation),
            ],
        ),
        question(
            20,
            Dimension::LearningOrientation,
            "学习时，你更喜欢：",
            vec![
                option("A", "从个人经验中学到的最多", SubDimension::ConcreteExperience),
                option("B", "通过仔细观察学到最多", SubDimension::ReflectiveObservation),
            ],
        ),
        question(
            21,
            Dimension::LearningOrientation,
            "学习时，你更喜欢：",
            vec![
                option("A", "做各种尝试和实验", SubDimension::ActiveExperimentation),
                option("B", "通过思考和逻辑来学习", SubDimension::AbstractConceptualization),
            ],
        ),
        question(
            22,
            Dimension::LearningOrientation,
            "学习时，你更重视：",
            vec![
                option("A", "尝试与实践", SubDimension::ActiveExperimentation),
                option("B", "分析和评估", SubDimension::AbstractConceptualization),
            ],
        ),
        question(
            23,
            Dimension::LearningOrientation,
            "学习时，你更倾向于：",
            vec![
                option("A", "通过做实验来学习", SubDimension::ActiveExperimentation),
                option("B", "通过观察来学习", SubDimension::ReflectiveObservation),
            ],
        ),
        question(
            24,
            Dimension::LearningOrientation,
            "学习时，你更喜欢：",
            vec![
                option("A", "做各种尝试和实践", SubDimension::ActiveExperimentation),
                option("B", "通过仔细观察别人来学习", SubDimension::ReflectiveObservation),
            ],
        ),
        question(
            25,
            Dimension::LearningOrientation,
            "学习时，你更重视：",
            vec![
                option("A", "通过逻辑和评估来学习", SubDimension::AbstractConceptualization),
                option("B", "通过观察和反思来学习", SubDimension::ReflectiveObservation),
            ],
        ),
        question(
            26,
            Dimension::LearningOrientation,
            "学习时，你更倾向于：",
            vec![
                option("A", "分析和思考", SubDimension::AbstractConceptualization),
                option("B", "观察和反思", SubDimension::ReflectiveObservation),
            ],
        ),
        // Cultural values
        question(
            27,
            Dimension::CulturalValues,
            "在选择工作时，你更重视：",
            vec![
                option("A", "常态的工作时间和地点", SubDimension::ComfortAndSecurity),
                option("B", "需要与很多其他人见面和交谈", SubDimension::CompetenceAndGrowth),
                option("C", "允许拥有更高管理职责", SubDimension::StatusAndIndependence),
            ],
        ),
        question(
            28,
            Dimension::CulturalValues,
            "在工作中，你更喜欢：",
            vec![
                option("A", "提供工作保障", SubDimension::ComfortAndSecurity),
                option("B", "激发智力", SubDimension::CompetenceAndGrowth),
                option("C", "提供赚取高收入的机会", SubDimension::StatusAndIndependence),
            ],
        ),
        question(
            29,
            Dimension::CulturalValues,
            "工作时，你更倾向于：",
            vec![
                option("A", "有可遵循的明确规则和程序", SubDimension::ComfortAndSecurity),
                option("B", "需要有原创性和创造性", SubDimension::CompetenceAndGrowth),
                option("C", "需要监督管理别人", SubDimension::StatusAndIndependence),
            ],
        ),
        question(
            30,
            Dimension::CulturalValues,
            "在职业选择中，你更看重：",
            vec![
                option("A", "工作后有充足的业余时间", SubDimension::ComfortAndSecurity),
                option("B", "通过你的工作做出社会贡献", SubDimension::CompetenceAndGrowth),
                option("C", "允许独立工作", SubDimension::StatusAndIndependence),
            ],
        ),
        question(
            31,
            Dimension::CulturalValues,
            "在工作环境中，你更在乎：",
            vec![
                option("A", "提供舒适的工作环境", SubDimension::ComfortAndSecurity),
                option("B", "满足你的文化和审美情趣", SubDimension::CompetenceAndGrowth),
                option("C", "受人尊重", SubDimension::StatusAndIndependence),
            ],
        ),
        question(
            32,
            Dimension::CulturalValues,
            "在工作中，你更重视（再次确认倾向）：",
            vec![
                option("A", "常态的工作时间和地点", SubDimension::ComfortAndSecurity),
                option("B", "需要与很多其他人见面和交谈", SubDimension::CompetenceAndGrowth),
                option("C", "允许拥有更高管理职责", SubDimension::StatusAndIndependence),
            ],
        ),
        question(
            33,
            Dimension::CulturalValues,
            "在工作中，你更看重（核心需求）：",
            vec![
                option("A", "提供工作保障", SubDimension::ComfortAndSecurity),
                option("B", "激发智力", SubDimension::CompetenceAndGrowth),
                option("C", "提供赚取高收入的机会", SubDimension::StatusAndIndependence),
            ],
        ),
        question(
            34,
            Dimension::CulturalValues,
            "在工作中，你更喜欢（执行偏好）：",
            vec![
                option("A", "有可遵循的明确规则和程序", SubDimension::ComfortAndSecurity),
                option("B", "需要有原创性和创造性", SubDimension::CompetenceAndGrowth),
                option("C", "需要监督管理别人", SubDimension::StatusAndIndependence),
            ],
        ),
        question(
            35,
            Dimension::CulturalValues,
            "在职业选择中，你更倾向于：",
            vec![
                option("A", "工作后有充足的业余时间", SubDimension::ComfortAndSecurity),
                option("B", "通过你的工作做出社会贡献", SubDimension::CompetenceAndGrowth),
                option("C", "允许独立工作", SubDimension::StatusAndIndependence),
            ],
        ),
        question(
            36,
            Dimension::CulturalValues,
            "在工作环境中，你更在乎：",
            vec![
                option("A", "提供舒适的工作环境", SubDimension::ComfortAndSecurity),
                option("B", "满足你的文化和审美情趣", SubDimension::CompetenceAndGrowth),
                option("C", "受人尊重", SubDimension::StatusAndIndependence),
            ],
        ),
        // Self values
        question(
            37,
            Dimension::SelfValues,
            "在选择工作时，你更看重：",
            vec![
                option("A", "较好的薪酬福利", SubDimension::Utilitarian),
                option("B", "工作符合自己的兴趣爱好", SubDimension::IntrinsicPreference),
                option("C", "融洽的工作氛围", SubDimension::InterpersonalHarmony),
            ],
        ),
        question(
            38,
            Dimension::SelfValues,
            "在工作中，你更在意：",
            vec![
                option("A", "不断增长的薪酬", SubDimension::Utilitarian),
                option("B", "工作是有价值和重要的", SubDimension::IntrinsicPreference),
                option("C", "同事之间互相尊重", SubDimension::InterpersonalHarmony),
            ],
        ),
        question(
            39,
            Dimension::SelfValues,
            "在职业选择中，你更重视：",
            vec![
                option("A", "努力付出会有等价回报", SubDimension::Utilitarian),
                option("B", "富有挑战性的工作", SubDimension::Innovation),
                option("C", "良好的职业发展规划", SubDimension::LongTermDevelopment),
            ],
        ),
        question(
            40,
            Dimension::SelfValues,
            "在工作中，你更喜欢：",
            vec![
                option("A", "不断增长的薪酬", SubDimension::Utilitarian),
                option("B", "创新的工作", SubDimension::Innovation),
                option("C", "良好的发展空间", SubDimension::LongTermDevelopment),
            ],
        ),
        question(
            41,
            Dimension::SelfValues,
            "在工作中，你更看重：",
            vec![
                option("A", "工作符合自己的兴趣爱好", SubDimension::IntrinsicPreference),
                option("B", "领导平易近人", SubDimension::InterpersonalHarmony),
                option("C", "创造性的工作理念", SubDimension::Innovation),
            ],
        ),
        question(
            42,
            Dimension::SelfValues,
            "在工作环境中，你更在意：",
            vec![
                option("A", "工作有趣味性", SubDimension::IntrinsicPreference),
                option("B", "团队有平等的人际关系", SubDimension::InterpersonalHarmony),
                option("C", "富有挑战性的工作", SubDimension::Innovation),
            ],
        ),
        question(
            43,
            Dimension::SelfValues,
            "在工作中，你更喜欢：",
            vec![
                option("A", "工作有趣味性", SubDimension::IntrinsicPreference),
                option("B", "创新的工作", SubDimension::Innovation),
                option("C", "不错的发展前景", SubDimension::LongTermDevelopment),
            ],
        ),
        question(
            44,
            Dimension::SelfValues,
            "在职业选择中，你更重视：",
            vec![
                option("A", "工作是有价值和重要的", SubDimension::IntrinsicPreference),
                option("B", "创造性的工作理念", SubDimension::Innovation),
                option("C", "良好的职业发展规划", SubDimension::LongTermDevelopment),
            ],
        ),
        question(
            45,
            Dimension::SelfValues,
            "在工作环境中，你更喜欢：",
            vec![
                option("A", "融洽的工作氛围", SubDimension::InterpersonalHarmony),
                option("B", "富有挑战性的工作", SubDimension::Innovation),
                option("C", "良好的发展空间", SubDimension::LongTermDevelopment),
            ],
        ),
        question(
            46,
            Dimension::SelfValues,
            "在职业选择中，你更在意：",
            vec![
                option("A", "领导平易近人", SubDimension::InterpersonalHarmony),
                option("B", "不是墨守成规的工作", SubDimension::Innovation),
                option("C", "良好的晋升机会", SubDimension::LongTermDevelopment),
            ],
        ),
    ]
}
