use crate::domain::model::Question;
use serde::Serialize;
use std::collections::BTreeMap;

/// Category ids mapped to display names, ordered by id.
pub type CategoryMap = BTreeMap<i64, String>;

#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionsPage {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: CategoryMap,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryQuestions {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeletedQuestion {
    pub success: bool,
    pub deleted_question: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatedQuestion {
    pub success: bool,
    pub created: i64,
    pub question: Question,
}

/// `question` is `null` once the quiz has run out of eligible questions.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: u16,
    pub message: String,
}
