//! Request handlers. Each one unpacks the request, calls the matching
//! `TriviaService` operation and returns its envelope as JSON.

use crate::core::service::TriviaService;
use crate::domain::envelope::{
    CategoriesResponse, CategoryQuestions, DeletedQuestion, QuestionsPage, QuizResponse,
};
use crate::domain::model::{CreateQuestionRequest, QuizRequest};
use crate::domain::ports::QuestionStore;
use crate::utils::error::TriviaError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub type SharedService<S> = Arc<TriviaService<S>>;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// Missing or non-numeric `?page=` falls back to the first page.
    pub fn page_number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// A query string that does not deserialize (e.g. a repeated `page`) is
/// treated like a missing one.
fn requested_page(query: Result<Query<PageQuery>, QueryRejection>) -> i64 {
    match query {
        Ok(Query(query)) => query.page_number(),
        Err(e) => {
            tracing::debug!("Ignoring malformed query string: {}", e.body_text());
            1
        }
    }
}

/// Request bodies must be JSON objects. Arrays would otherwise fill the
/// request structs positionally.
fn object_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, TriviaError> {
    let Json(body) = payload.map_err(|e| TriviaError::bad_request(e.body_text()))?;
    if !body.is_object() {
        return Err(TriviaError::bad_request("request body must be a JSON object"));
    }
    Ok(body)
}

pub async fn root() -> &'static str {
    "Welcome to the trivia API!"
}

pub async fn list_categories<S: QuestionStore + 'static>(
    State(service): State<SharedService<S>>,
) -> Result<Json<CategoriesResponse>, TriviaError> {
    Ok(Json(service.list_categories()?))
}

pub async fn list_questions<S: QuestionStore + 'static>(
    State(service): State<SharedService<S>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionsPage>, TriviaError> {
    Ok(Json(service.list_questions(requested_page(query))?))
}

/// `POST /questions` searches when the body names a `searchTerm` and creates
/// a question otherwise.
pub async fn search_or_create_question<S: QuestionStore + 'static>(
    State(service): State<SharedService<S>>,
    query: Result<Query<PageQuery>, QueryRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, TriviaError> {
    let body = object_body(payload)?;

    match body.get("searchTerm") {
        Some(Value::Null) | None => {
            let request: CreateQuestionRequest = serde_json::from_value(body)
                .map_err(|e| TriviaError::bad_request(e.to_string()))?;
            Ok(Json(service.create_question(request)?).into_response())
        }
        Some(Value::String(term)) => {
            Ok(Json(service.search_questions(term, requested_page(query))?).into_response())
        }
        Some(other) => Err(TriviaError::bad_request(format!(
            "searchTerm must be a string, got {}",
            other
        ))),
    }
}

pub async fn delete_question<S: QuestionStore + 'static>(
    State(service): State<SharedService<S>>,
    question_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedQuestion>, TriviaError> {
    let Path(question_id) = question_id.map_err(|e| TriviaError::not_found(e.body_text()))?;
    Ok(Json(service.delete_question(question_id)?))
}

pub async fn questions_by_category<S: QuestionStore + 'static>(
    State(service): State<SharedService<S>>,
    category_id: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<CategoryQuestions>, TriviaError> {
    let Path(category_id) = category_id.map_err(|e| TriviaError::not_found(e.body_text()))?;
    Ok(Json(service.questions_by_category(category_id, requested_page(query))?))
}

pub async fn next_quiz_question<S: QuestionStore + 'static>(
    State(service): State<SharedService<S>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<QuizResponse>, TriviaError> {
    let body = object_body(payload)?;
    let request: QuizRequest =
        serde_json::from_value(body).map_err(|e| TriviaError::bad_request(e.to_string()))?;
    Ok(Json(service.next_quiz_question(request)?))
}

pub async fn not_found(uri: axum::http::Uri) -> TriviaError {
    TriviaError::not_found(format!("route {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(raw: &str) -> PageQuery {
        PageQuery {
            page: Some(raw.to_string()),
        }
    }

    #[test]
    fn test_page_query_defaults_to_first_page() {
        assert_eq!(PageQuery::default().page_number(), 1);
        assert_eq!(page("abc").page_number(), 1);
        assert_eq!(page("3").page_number(), 3);
        assert_eq!(page("-2").page_number(), -2);
    }

    #[test]
    fn test_object_body_rejects_other_shapes() {
        assert!(object_body(Ok(Json(json!({"question": "Q"})))).is_ok());

        for body in [json!(["Q", "A", 1, 2]), json!(42), json!("text"), json!(null)] {
            let err = object_body(Ok(Json(body))).unwrap_err();
            assert_eq!(err.status_code(), 400);
        }
    }
}
