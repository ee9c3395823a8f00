//! Read-only level and question store
//!
//! Loaded once at startup and validated up front, so a broken level fails
//! here instead of halfway through a level attempt.

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};

/// Reference content shipped with the game
const REFERENCE_LEVELS: &str = include_str!("../assets/levels.json");

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    /// Index into `options`
    pub correct_answer: usize,
    pub hint: String,
}

impl Question {
    #[inline]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }
}

/// One level: an ordered run of questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct ContentFile {
    levels: Vec<Level>,
}

/// Ordered, validated sequence of levels
#[derive(Debug, Clone)]
pub struct ContentStore {
    levels: Vec<Level>,
}

impl ContentStore {
    /// Build a store, checking that every level can be finished with
    /// `questions_per_level` answers
    pub fn new(levels: Vec<Level>, questions_per_level: u32) -> Result<Self> {
        validate(&levels, questions_per_level)?;
        Ok(Self { levels })
    }

    /// Parse `{"levels": [...]}` JSON
    pub fn from_json(json: &str, questions_per_level: u32) -> Result<Self> {
        let file: ContentFile = serde_json::from_str(json)?;
        Self::new(file.levels, questions_per_level)
    }

    /// The built-in rational-numbers curriculum
    pub fn reference(questions_per_level: u32) -> Result<Self> {
        Self::from_json(REFERENCE_LEVELS, questions_per_level)
    }

    /// Re-check every level against a threshold, e.g. the one in the
    /// tuning the store is paired with
    pub fn check_threshold(&self, questions_per_level: u32) -> Result<()> {
        validate(&self.levels, questions_per_level)
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level(&self, index: usize) -> Result<&Level> {
        self.levels.get(index).ok_or(ContentError::LevelOutOfRange {
            level: index,
            available: self.levels.len(),
        })
    }

    pub fn question(&self, level: usize, question: usize) -> Result<&Question> {
        self.level(level)?
            .questions
            .get(question)
            .ok_or(ContentError::MissingQuestion { level, question })
    }
}

fn validate(levels: &[Level], questions_per_level: u32) -> Result<()> {
    if levels.is_empty() {
        return Err(ContentError::NoLevels);
    }

    for (level_idx, level) in levels.iter().enumerate() {
        if level.questions.is_empty() {
            return Err(ContentError::EmptyLevel { level: level_idx });
        }
        if level.questions.len() < questions_per_level as usize {
            return Err(ContentError::TooFewQuestions {
                level: level_idx,
                found: level.questions.len(),
                required: questions_per_level,
            });
        }
        for (q_idx, q) in level.questions.iter().enumerate() {
            if q.options.is_empty() {
                return Err(ContentError::NoOptions {
                    level: level_idx,
                    question: q_idx,
                });
            }
            if q.correct_answer >= q.options.len() {
                return Err(ContentError::CorrectAnswerOutOfRange {
                    level: level_idx,
                    question: q_idx,
                    correct: q.correct_answer,
                    options: q.options.len(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: usize) -> Question {
        Question {
            id: 1,
            text: "-5 + (-3) = ?".into(),
            options: vec!["-8".into(), "-2".into(), "8".into(), "2".into()],
            correct_answer: correct,
            hint: "Two debts add up.".into(),
        }
    }

    fn level(n: usize) -> Level {
        Level {
            id: 1,
            title: "Test".into(),
            description: String::new(),
            questions: (0..n).map(|_| question(0)).collect(),
        }
    }

    #[test]
    fn test_reference_content_loads() {
        let store = ContentStore::reference(10).unwrap();
        assert_eq!(store.level_count(), 3);
        for level in store.levels() {
            assert_eq!(level.questions.len(), 10);
            for q in &level.questions {
                assert_eq!(q.options.len(), 4);
                assert!(q.correct_answer < 4);
            }
        }
    }

    #[test]
    fn test_lookup_out_of_range() {
        let store = ContentStore::new(vec![level(2)], 2).unwrap();
        assert!(store.question(0, 1).is_ok());
        assert!(matches!(
            store.question(0, 2),
            Err(ContentError::MissingQuestion { level: 0, question: 2 })
        ));
        assert!(matches!(
            store.level(1),
            Err(ContentError::LevelOutOfRange { level: 1, available: 1 })
        ));
    }

    #[test]
    fn test_rejects_empty_store_and_level() {
        assert!(matches!(ContentStore::new(vec![], 1), Err(ContentError::NoLevels)));
        assert!(matches!(
            ContentStore::new(vec![level(3), level(0)], 0),
            Err(ContentError::EmptyLevel { level: 1 })
        ));
    }

    #[test]
    fn test_rejects_level_too_short_to_finish() {
        assert!(matches!(
            ContentStore::new(vec![level(9)], 10),
            Err(ContentError::TooFewQuestions { level: 0, found: 9, required: 10 })
        ));
    }

    #[test]
    fn test_check_threshold_against_larger_value() {
        let store = ContentStore::new(vec![level(10)], 10).unwrap();
        assert!(store.check_threshold(10).is_ok());
        assert!(matches!(
            store.check_threshold(11),
            Err(ContentError::TooFewQuestions { level: 0, found: 10, required: 11 })
        ));
    }

    #[test]
    fn test_rejects_bad_correct_answer() {
        let mut lvl = level(1);
        lvl.questions[0].correct_answer = 4;
        assert!(matches!(
            ContentStore::new(vec![lvl], 1),
            Err(ContentError::CorrectAnswerOutOfRange { correct: 4, options: 4, .. })
        ));

        let mut lvl = level(1);
        lvl.questions[0].options.clear();
        assert!(matches!(
            ContentStore::new(vec![lvl], 1),
            Err(ContentError::NoOptions { level: 0, question: 0 })
        ));
    }

    #[test]
    fn test_from_json_minimal_fields() {
        let json = r#"{"levels":[{"questions":[
            {"text":"0 is...","options":["positive","neither"],"correct_answer":1,"hint":"middle"}
        ]}]}"#;
        let store = ContentStore::from_json(json, 1).unwrap();
        let q = store.question(0, 0).unwrap();
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
    }
}
