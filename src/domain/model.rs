use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inclusive bounds for a question's difficulty score.
pub const MIN_DIFFICULTY: i64 = 1;
pub const MAX_DIFFICULTY: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    #[serde(rename = "question")]
    pub text: String,
    pub answer: String,
    #[serde(rename = "category")]
    pub category_id: i64,
    pub difficulty: i64,
}

/// A validated question that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: String,
    pub answer: String,
    pub category_id: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            text: self.text,
            answer: self.answer,
            category_id: self.category_id,
            difficulty: self.difficulty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(alias = "type")]
    pub name: String,
}

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(i64),
}

impl CategoryFilter {
    /// Maps the wire sentinel `0` to `All`.
    pub fn from_wire_id(id: i64) -> Self {
        if id == 0 {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id)
        }
    }

    pub fn matches(&self, question: &Question) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => question.category_id == *id,
        }
    }
}

/// Body of `POST /questions` when it is not a search. Fields stay loose
/// so that validation can report a bad request instead of a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<Value>,
    pub difficulty: Option<Value>,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Value>,
    pub quiz_category: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_question_wire_names() {
        let question = Question {
            id: 7,
            text: "Who painted the Mona Lisa?".to_string(),
            answer: "Leonardo da Vinci".to_string(),
            category_id: 2,
            difficulty: 3,
        };

        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["question"], "Who painted the Mona Lisa?");
        assert_eq!(value["category"], 2);
        assert!(value.get("text").is_none());
    }

    #[test]
    fn test_category_accepts_type_alias() {
        let raw = json!({"id": 1, "type": "Science"});
        let category: Category = serde_json::from_value(raw).unwrap();
        assert_eq!(category.name, "Science");
    }

    #[test]
    fn test_category_filter_sentinel() {
        assert_eq!(CategoryFilter::from_wire_id(0), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_wire_id(4), CategoryFilter::Only(4));
    }
}
