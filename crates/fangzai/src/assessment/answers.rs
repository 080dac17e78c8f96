use super::domain::AnswerMap;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answer sheet: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answer CSV data: {}", err),
            AnswerImportError::Json(err) => write!(f, "invalid answer JSON data: {}", err),
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
            AnswerImportError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for AnswerImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// One respondent's answers from a batch sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RespondentAnswers {
    pub respondent: String,
    pub answers: AnswerMap,
}

pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    /// Read a single answer map shaped like `{"1": "B", "10": "A"}`.
    pub fn json_from_path<P: AsRef<Path>>(path: P) -> Result<AnswerMap, AnswerImportError> {
        let file = std::fs::File::open(path)?;
        Self::json_from_reader(file)
    }

    pub fn json_from_reader<R: Read>(reader: R) -> Result<AnswerMap, AnswerImportError> {
        let answers: HashMap<u32, String> = serde_json::from_reader(reader)?;
        Ok(answers
            .into_iter()
            .filter_map(|(id, token)| normalize_token(&token).map(|token| (id, token)))
            .collect())
    }

    pub fn batch_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<RespondentAnswers>, AnswerImportError> {
        let file = std::fs::File::open(path)?;
        Self::batch_from_reader(file)
    }

    /// Read long-format rows (`respondent,question,answer`). Respondents keep
    /// first-seen order; a later row for the same question replaces the earlier one.
    pub fn batch_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<RespondentAnswers>, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut respondents: Vec<RespondentAnswers> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for record in csv_reader.deserialize::<AnswerRow>() {
            let row = record?;
            let position = *positions.entry(row.respondent.clone()).or_insert_with(|| {
                respondents.push(RespondentAnswers {
                    respondent: row.respondent.clone(),
                    answers: AnswerMap::new(),
                });
                respondents.len() - 1
            });

            if let Some(token) = row.answer.as_deref().and_then(normalize_token) {
                respondents[position].answers.insert(row.question, token);
            }
        }

        Ok(respondents)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    respondent: String,
    question: u32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    answer: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn normalize_token(token: &str) -> Option<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
