use crate::domain::model::{Category, MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::utils::error::{Result, TriviaError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedQuestion {
    pub id: Option<i64>,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl SeedData {
    /// 從 JSON 檔案載入初始資料
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let seed = Self::from_json_str(&content)?;
        tracing::debug!(
            "Loaded seed file {} ({} categories, {} questions)",
            path.as_ref().display(),
            seed.categories.len(),
            seed.questions.len()
        );
        Ok(seed)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let seed: SeedData = serde_json::from_str(content)?;
        seed.check()?;
        Ok(seed)
    }

    /// Rejects duplicate ids, empty text, unknown categories and out-of-range
    /// difficulty before anything reaches a store.
    pub fn check(&self) -> Result<()> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id) {
                return Err(seed_error(format!("duplicate category id {}", category.id)));
            }
            if category.name.trim().is_empty() {
                return Err(seed_error(format!("category {} has an empty name", category.id)));
            }
        }

        let mut question_ids = HashSet::new();
        for (index, question) in self.questions.iter().enumerate() {
            let label = question
                .id
                .map(|id| format!("question {}", id))
                .unwrap_or_else(|| format!("question #{}", index + 1));

            if let Some(id) = question.id {
                if !question_ids.insert(id) {
                    return Err(seed_error(format!("duplicate question id {}", id)));
                }
            }
            if question.question.trim().is_empty() || question.answer.trim().is_empty() {
                return Err(seed_error(format!("{} needs both text and an answer", label)));
            }
            if !category_ids.contains(&question.category) {
                return Err(seed_error(format!(
                    "{} references unknown category {}",
                    label, question.category
                )));
            }
            if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&question.difficulty) {
                return Err(seed_error(format!(
                    "{} has difficulty {} outside {}..={}",
                    label, question.difficulty, MIN_DIFFICULTY, MAX_DIFFICULTY
                )));
            }
        }

        Ok(())
    }
}

fn seed_error(message: String) -> TriviaError {
    TriviaError::SeedError { message }
}
