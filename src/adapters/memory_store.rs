use crate::adapters::seed::SeedData;
use crate::domain::model::{Category, NewQuestion, Question};
use crate::domain::ports::QuestionStore;
use crate::utils::error::{StoreError, StoreResult};
use rand::seq::SliceRandom;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct StoreState {
    questions: BTreeMap<i64, Question>,
    categories: BTreeMap<i64, Category>,
    next_id: i64,
}

impl StoreState {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Process-local question store. Ids are allocated monotonically and never
/// reused after a delete.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let categories = categories
            .into_iter()
            .map(|category| (category.id, category))
            .collect();

        Self {
            state: RwLock::new(StoreState {
                categories,
                ..StoreState::default()
            }),
        }
    }

    /// Builds a store from checked seed data. Questions without an id get one
    /// after the largest seeded id.
    pub fn from_seed(seed: SeedData) -> StoreResult<Self> {
        let store = Self::with_categories(seed.categories);
        {
            let mut state = store.write()?;
            state.next_id = seed.questions.iter().filter_map(|q| q.id).max().unwrap_or(0);

            for seeded in seed.questions {
                if !state.categories.contains_key(&seeded.category) {
                    return Err(StoreError::UnknownCategory(seeded.category));
                }
                let id = match seeded.id {
                    Some(id) => id,
                    None => state.allocate_id(),
                };
                if state.questions.contains_key(&id) {
                    return Err(StoreError::DuplicateId(id));
                }
                state.questions.insert(
                    id,
                    Question {
                        id,
                        text: seeded.question,
                        answer: seeded.answer,
                        category_id: seeded.category,
                        difficulty: seeded.difficulty,
                    },
                );
            }
        }

        let (categories, questions) = {
            let state = store.read()?;
            (state.categories.len(), state.questions.len())
        };
        tracing::info!(
            "Question store seeded with {} categories and {} questions",
            categories,
            questions
        );
        Ok(store)
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|e| StoreError::Unavailable(format!("lock poisoned: {}", e)))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|e| StoreError::Unavailable(format!("lock poisoned: {}", e)))
    }

    fn collect_where<F>(&self, predicate: F) -> StoreResult<Vec<Question>>
    where
        F: Fn(&Question) -> bool,
    {
        let state = self.read()?;
        Ok(state
            .questions
            .values()
            .filter(|question| predicate(*question))
            .cloned()
            .collect())
    }
}

impl QuestionStore for InMemoryStore {
    fn insert(&self, question: NewQuestion) -> StoreResult<Question> {
        let mut state = self.write()?;
        if !state.categories.contains_key(&question.category_id) {
            return Err(StoreError::UnknownCategory(question.category_id));
        }

        let id = state.allocate_id();
        let question = question.with_id(id);
        state.questions.insert(id, question.clone());
        Ok(question)
    }

    fn delete(&self, id: i64) -> StoreResult<()> {
        let mut state = self.write()?;
        state
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::MissingQuestion(id))
    }

    fn get(&self, id: i64) -> StoreResult<Option<Question>> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    fn all(&self) -> StoreResult<Vec<Question>> {
        self.collect_where(|_| true)
    }

    fn filter_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        self.collect_where(|question| question.category_id == category_id)
    }

    fn filter_by_text(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        self.collect_where(|question| question.text.to_lowercase().contains(&needle))
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.read()?.questions.len())
    }

    fn all_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    fn get_category(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    fn random_order(&self) -> StoreResult<Vec<Question>> {
        let mut questions = self.all()?;
        questions.shuffle(&mut rand::thread_rng());
        Ok(questions)
    }
}
