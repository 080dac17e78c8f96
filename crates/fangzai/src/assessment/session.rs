use super::catalog::QuestionCatalog;
use super::domain::{AnswerMap, Question};
use serde::Serialize;

/// Where the respondent is in the home → quiz → report flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStep {
    Home,
    Quiz,
    Report,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("quiz is not in progress")]
    NotInProgress,
    #[error("question {question_id} has no option '{token}'")]
    UnknownOption { question_id: u32, token: String },
}

/// Caller-owned walk through the catalog. The scoring engine only ever sees
/// the answer snapshot returned by [`QuizSession::answers`].
#[derive(Debug)]
pub struct QuizSession<'a> {
    catalog: &'a QuestionCatalog,
    step: QuizStep,
    index: usize,
    answers: AnswerMap,
}

impl<'a> QuizSession<'a> {
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self {
            catalog,
            step: QuizStep::Home,
            index: 0,
            answers: AnswerMap::new(),
        }
    }

    /// Begin (or restart) the quiz from the first question with no answers.
    pub fn start(&mut self) {
        self.step = if self.catalog.is_empty() {
            QuizStep::Report
        } else {
            QuizStep::Quiz
        };
        self.index = 0;
        self.answers.clear();
    }

    pub fn restart(&mut self) {
        self.step = QuizStep::Home;
    }

    pub fn step(&self) -> QuizStep {
        self.step
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_question(&self) -> Option<&'a Question> {
        match self.step {
            QuizStep::Quiz => self.catalog.questions().get(self.index),
            _ => None,
        }
    }

    /// Record a token for the current question and advance; the last answer
    /// moves the session to the report step.
    pub fn answer(&mut self, token: &str) -> Result<QuizStep, SessionError> {
        let question = self.current_question().ok_or(SessionError::NotInProgress)?;
        let token = token.trim();

        if question.option(token).is_none() {
            return Err(SessionError::UnknownOption {
                question_id: question.id,
                token: token.to_string(),
            });
        }

        self.answers.insert(question.id, token.to_string());

        if self.index + 1 < self.catalog.len() {
            self.index += 1;
        } else {
            self.step = QuizStep::Report;
        }

        Ok(self.step)
    }

    /// Step back one question. Earlier answers are kept.
    pub fn back(&mut self) {
        if self.step == QuizStep::Quiz && self.index > 0 {
            self.index -= 1;
        }
    }

    /// Percentage of questions passed, rounded to the nearest whole number.
    pub fn progress_pct(&self) -> u32 {
        let total = self.catalog.len();
        if total == 0 {
            return 0;
        }

        ((self.index as f64 / total as f64) * 100.0).round() as u32
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_advances_and_finishes_on_last_answer() {
        let catalog = QuestionCatalog::standard();
        let mut session = QuizSession::new(&catalog);
        assert_eq!(session.step(), QuizStep::Home);
        assert!(session.current_question().is_none());

        session.start();
        assert_eq!(session.current_question().map(|q| q.id), Some(1));
        assert_eq!(session.progress_pct(), 0);

        for _ in 0..catalog.len() - 1 {
            assert_eq!(session.answer("A"), Ok(QuizStep::Quiz));
        }
        assert_eq!(session.current_question().map(|q| q.id), Some(46));
        assert_eq!(session.progress_pct(), 98);

        assert_eq!(session.answer("B"), Ok(QuizStep::Report));
        assert_eq!(session.answers().len(), 46);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn unknown_tokens_are_rejected_without_advancing() {
        let catalog = QuestionCatalog::standard();
        let mut session = QuizSession::new(&catalog);
        session.start();

        let err = session.answer("C").unwrap_err();
        assert_eq!(
            err,
            SessionError::UnknownOption {
                question_id: 1,
                token: "C".to_string()
            }
        );
        assert_eq!(session.index(), 0);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn back_keeps_answers_and_stops_at_first_question() {
        let catalog = QuestionCatalog::standard();
        let mut session = QuizSession::new(&catalog);
        session.start();
        session.back();
        assert_eq!(session.index(), 0);

        session.answer("B").expect("valid token");
        session.back();
        assert_eq!(session.index(), 0);
        assert_eq!(session.answers().get(&1).map(String::as_str), Some("B"));

        session.answer("A").expect("valid token");
        assert_eq!(session.answers().get(&1).map(String::as_str), Some("A"));
    }

    #[test]
    fn answering_before_start_is_an_error() {
        let catalog = QuestionCatalog::standard();
        let mut session = QuizSession::new(&catalog);
        assert_eq!(session.answer("A"), Err(SessionError::NotInProgress));
    }

    #[test]
    fn start_clears_previous_answers() {
        let catalog = QuestionCatalog::standard();
        let mut session = QuizSession::new(&catalog);
        session.start();
        session.answer("A").expect("valid token");
        session.restart();
        assert_eq!(session.step(), QuizStep::Home);

        session.start();
        assert!(session.answers().is_empty());
        assert_eq!(session.index(), 0);
    }
}
