//! HTTP surface of the trivia API.
//!
//! Maps routes onto `TriviaService` operations, attaches permissive CORS
//! headers to every response and logs each request.

pub mod error;
pub mod handlers;

use crate::core::service::TriviaService;
use crate::domain::ports::QuestionStore;
use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use std::time::Instant;

pub use handlers::SharedService;

pub fn router<S: QuestionStore + 'static>(service: Arc<TriviaService<S>>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/categories", get(handlers::list_categories::<S>))
        .route(
            "/questions",
            get(handlers::list_questions::<S>).post(handlers::search_or_create_question::<S>),
        )
        .route("/questions/:question_id", delete(handlers::delete_question::<S>))
        .route(
            "/categories/:category_id/questions",
            get(handlers::questions_by_category::<S>),
        )
        .route("/quizzes", post(handlers::next_quiz_question::<S>))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(cors))
        .layer(middleware::from_fn(log_requests))
        .with_state(service)
}

async fn cors(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PATCH, DELETE, OPTIONS"),
    );
    response
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        "{} {} -> {} ({:?})",
        method,
        path,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}
