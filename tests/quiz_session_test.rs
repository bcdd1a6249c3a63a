use serde_json::json;
use std::collections::HashSet;
use tokio_test::{assert_err, assert_ok};
use trivia_api::adapters::seed::SeedData;
use trivia_api::core::QuestionStore;
use trivia_api::domain::model::QuizRequest;
use trivia_api::utils::error::ErrorKind;
use trivia_api::{InMemoryStore, TriviaService};

const SEED_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/trivia.json");

fn seeded_service() -> TriviaService<InMemoryStore> {
    let seed = assert_ok!(SeedData::from_file(SEED_FILE));
    TriviaService::new(assert_ok!(InMemoryStore::from_seed(seed)))
}

/// 模擬前端：每次把已出過的題目傳回去，直到沒有題目為止
fn play(service: &TriviaService<InMemoryStore>, category: serde_json::Value) -> Vec<i64> {
    let mut previous: Vec<i64> = Vec::new();

    loop {
        let response = assert_ok!(service.next_quiz_question(QuizRequest {
            previous_questions: Some(json!(previous)),
            quiz_category: Some(category.clone()),
        }));
        assert!(response.success);

        match response.question {
            Some(question) => {
                assert!(
                    !previous.contains(&question.id),
                    "question {} served twice",
                    question.id
                );
                previous.push(question.id);
            }
            None => return previous,
        }
    }
}

#[test]
fn test_full_quiz_in_one_category() {
    let service = seeded_service();

    let served = play(&service, json!({"type": "Art", "id": 2}));

    let mut sorted = served.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![16, 17, 18, 19]);
    for id in served {
        let question = assert_ok!(service.store().get(id)).unwrap();
        assert_eq!(question.category_id, 2);
    }
}

#[test]
fn test_full_quiz_across_all_categories() {
    let service = seeded_service();

    let served = play(&service, json!({"type": "click", "id": 0}));

    assert_eq!(served.len(), 19);
    assert_eq!(served.iter().collect::<HashSet<_>>().len(), 19);
}

#[test]
fn test_quiz_after_delete_skips_removed_question() {
    let service = seeded_service();
    assert_ok!(service.delete_question(21));

    let served = play(&service, json!({"id": 1}));

    let mut sorted = served.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![20, 22]);
}

#[test]
fn test_quiz_without_previous_questions_is_bad_request() {
    let service = seeded_service();

    let err = assert_err!(service.next_quiz_question(QuizRequest {
        previous_questions: None,
        quiz_category: Some(json!({"id": 1})),
    }));
    assert_eq!(err.kind(), ErrorKind::BadRequest);
}
