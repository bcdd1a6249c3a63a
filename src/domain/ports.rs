use crate::domain::model::{Category, NewQuestion, Question};
use crate::utils::error::StoreResult;

/// Persistence for questions and their categories.
///
/// Implementations handle their own concurrency control; every write must be
/// atomic on its own.
pub trait QuestionStore: Send + Sync {
    /// Persists a question and returns it with its assigned id.
    fn insert(&self, question: NewQuestion) -> StoreResult<Question>;

    fn delete(&self, id: i64) -> StoreResult<()>;

    fn get(&self, id: i64) -> StoreResult<Option<Question>>;

    /// All questions ordered by id.
    fn all(&self) -> StoreResult<Vec<Question>>;

    fn filter_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case.
    fn filter_by_text(&self, term: &str) -> StoreResult<Vec<Question>>;

    fn count(&self) -> StoreResult<usize>;

    /// All categories ordered by id.
    fn all_categories(&self) -> StoreResult<Vec<Category>>;

    fn get_category(&self, id: i64) -> StoreResult<Option<Category>>;

    /// All questions in a shuffled order.
    fn random_order(&self) -> StoreResult<Vec<Question>>;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn seed_file(&self) -> Option<&str>;
    fn log_level(&self) -> &str;
    fn json_logs(&self) -> bool;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
