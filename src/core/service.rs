use crate::core::pager::{paginate, QUESTIONS_PER_PAGE};
use crate::core::quiz::{QuizDraw, QuizSelector};
use crate::domain::envelope::{
    CategoriesResponse, CategoryMap, CategoryQuestions, CreatedQuestion, DeletedQuestion,
    QuestionsPage, QuizResponse, SearchResults,
};
use crate::domain::model::{
    CategoryFilter, CreateQuestionRequest, NewQuestion, Question, QuizRequest, MAX_DIFFICULTY,
    MIN_DIFFICULTY,
};
use crate::domain::ports::QuestionStore;
use crate::utils::error::{Result, StoreError, TriviaError};
use crate::utils::validation::coerce_integer;
use rand::Rng;
use serde_json::Value;
use std::collections::HashSet;

/// Answers every trivia use case against an injected question store.
pub struct TriviaService<S: QuestionStore> {
    store: S,
}

impl<S: QuestionStore> TriviaService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_categories(&self) -> Result<CategoriesResponse> {
        let categories = self.category_map()?;
        if categories.is_empty() {
            return Err(TriviaError::not_found("categories"));
        }

        Ok(CategoriesResponse {
            success: true,
            total_categories: categories.len(),
            categories,
        })
    }

    /// Any empty page is NotFound here, including a page past the end of a
    /// non-empty question list.
    pub fn list_questions(&self, page: i64) -> Result<QuestionsPage> {
        tracing::debug!("Listing questions, page {}", page);
        let ordered = self.questions_by_category_order()?;
        let total_questions = ordered.len();
        let questions = paginate(ordered, page, QUESTIONS_PER_PAGE);
        if questions.is_empty() {
            return Err(TriviaError::not_found(format!("questions page {}", page)));
        }

        let categories = self.category_map()?;
        Ok(QuestionsPage {
            success: true,
            questions,
            total_questions,
            current_category: categories.clone(),
            categories,
        })
    }

    /// Unlike `list_questions`, no matches is a successful empty page.
    pub fn search_questions(&self, term: &str, page: i64) -> Result<SearchResults> {
        tracing::debug!("Searching questions for '{}', page {}", term, page);
        let mut matches = self.store.filter_by_text(term)?;
        matches.sort_by_key(|question| question.id);
        let total_questions = matches.len();

        Ok(SearchResults {
            success: true,
            questions: paginate(matches, page, QUESTIONS_PER_PAGE),
            total_questions,
        })
    }

    pub fn questions_by_category(&self, category_id: i64, page: i64) -> Result<CategoryQuestions> {
        tracing::debug!("Listing category {} questions, page {}", category_id, page);
        let category = self
            .store
            .get_category(category_id)?
            .ok_or_else(|| TriviaError::not_found(format!("category {}", category_id)))?;

        let mut filtered = self.store.filter_by_category(category_id)?;
        filtered.sort_by_key(|question| question.id);
        let total_questions = filtered.len();

        let questions = paginate(filtered, page, QUESTIONS_PER_PAGE);
        if questions.is_empty() {
            return Err(TriviaError::not_found(format!(
                "category {} questions page {}",
                category_id, page
            )));
        }

        Ok(CategoryQuestions {
            success: true,
            questions,
            total_questions,
            current_category: category.name,
        })
    }

    pub fn delete_question(&self, question_id: i64) -> Result<DeletedQuestion> {
        if self.store.get(question_id)?.is_none() {
            return Err(TriviaError::not_found(format!("question {}", question_id)));
        }

        match self.store.delete(question_id) {
            Ok(()) => {}
            // lost a race with another delete
            Err(StoreError::MissingQuestion(id)) => {
                return Err(TriviaError::not_found(format!("question {}", id)));
            }
            Err(e) => {
                tracing::error!("Failed to delete question {}: {}", question_id, e);
                return Err(e.into());
            }
        }
        tracing::info!("Deleted question {}", question_id);

        let remaining = self.questions_by_category_order()?;
        let total_questions = remaining.len();
        Ok(DeletedQuestion {
            success: true,
            deleted_question: question_id,
            questions: paginate(remaining, 1, QUESTIONS_PER_PAGE),
            total_questions,
        })
    }

    pub fn create_question(&self, request: CreateQuestionRequest) -> Result<CreatedQuestion> {
        let new_question = parse_new_question(request)?;

        let question = self.store.insert(new_question).map_err(|e| {
            tracing::error!("Failed to create question: {}", e);
            TriviaError::from(e)
        })?;
        tracing::info!(
            "Created question {} in category {}",
            question.id,
            question.category_id
        );

        Ok(CreatedQuestion {
            success: true,
            created: question.id,
            question,
        })
    }

    pub fn next_quiz_question(&self, request: QuizRequest) -> Result<QuizResponse> {
        self.next_quiz_question_with_rng(request, &mut rand::thread_rng())
    }

    pub fn next_quiz_question_with_rng<R: Rng + ?Sized>(
        &self,
        request: QuizRequest,
        rng: &mut R,
    ) -> Result<QuizResponse> {
        let (previous_ids, filter) = parse_quiz_request(request)?;

        let selector = QuizSelector::new(&self.store);
        let question = match selector.next_question(filter, &previous_ids, rng)? {
            QuizDraw::Next(question) => Some(question),
            QuizDraw::Exhausted => {
                tracing::debug!("Quiz exhausted for {:?}", filter);
                None
            }
        };

        Ok(QuizResponse {
            success: true,
            question,
        })
    }

    fn category_map(&self) -> Result<CategoryMap> {
        Ok(self
            .store
            .all_categories()?
            .into_iter()
            .map(|category| (category.id, category.name))
            .collect())
    }

    /// All questions grouped by category, ids ascending within a category.
    fn questions_by_category_order(&self) -> Result<Vec<Question>> {
        let mut questions = self.store.all()?;
        questions.sort_by_key(|question| (question.category_id, question.id));
        Ok(questions)
    }
}

fn parse_new_question(request: CreateQuestionRequest) -> Result<NewQuestion> {
    let text = required_text("question", request.question)?;
    let answer = required_text("answer", request.answer)?;
    let category_id = required_integer("category", request.category.as_ref())?;
    let difficulty = required_integer("difficulty", request.difficulty.as_ref())?;

    if category_id == 0 {
        return Err(TriviaError::bad_request("category must not be 0"));
    }
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
        return Err(TriviaError::bad_request(format!(
            "difficulty must be between {} and {}",
            MIN_DIFFICULTY, MAX_DIFFICULTY
        )));
    }

    Ok(NewQuestion {
        text,
        answer,
        category_id,
        difficulty,
    })
}

fn parse_quiz_request(request: QuizRequest) -> Result<(HashSet<i64>, CategoryFilter)> {
    let previous = request
        .previous_questions
        .ok_or_else(|| TriviaError::bad_request("previous_questions is required"))?;
    let category = request
        .quiz_category
        .ok_or_else(|| TriviaError::bad_request("quiz_category is required"))?;

    let previous_ids = match previous {
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_i64().ok_or_else(|| {
                    TriviaError::bad_request(format!(
                        "previous_questions must hold integers, got {}",
                        item
                    ))
                })
            })
            .collect::<Result<HashSet<i64>>>()?,
        other => {
            return Err(TriviaError::bad_request(format!(
                "previous_questions must be a list, got {}",
                other
            )))
        }
    };

    let category_id = category
        .get("id")
        .and_then(coerce_integer)
        .ok_or_else(|| TriviaError::bad_request("quiz_category.id must be an integer"))?;

    Ok((previous_ids, CategoryFilter::from_wire_id(category_id)))
}

fn required_text(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(TriviaError::bad_request(format!("{} is required", field))),
    }
}

fn required_integer(field: &str, value: Option<&Value>) -> Result<i64> {
    let value = value.ok_or_else(|| TriviaError::bad_request(format!("{} is required", field)))?;
    coerce_integer(value)
        .ok_or_else(|| TriviaError::bad_request(format!("{} must be an integer", field)))
}
