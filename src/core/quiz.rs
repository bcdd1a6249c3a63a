use crate::domain::model::{CategoryFilter, Question};
use crate::domain::ports::QuestionStore;
use crate::utils::error::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Outcome of drawing the next quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizDraw {
    Next(Question),
    /// Every eligible question has already been served.
    Exhausted,
}

/// Draws quiz questions from a store. Holds no state of its own: everything
/// a session has seen so far arrives in `previous_ids`.
pub struct QuizSelector<'a, S: QuestionStore> {
    store: &'a S,
}

impl<'a, S: QuestionStore> QuizSelector<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn next_question<R: Rng + ?Sized>(
        &self,
        filter: CategoryFilter,
        previous_ids: &HashSet<i64>,
        rng: &mut R,
    ) -> Result<QuizDraw> {
        let candidates = match filter {
            CategoryFilter::All => self.store.all()?,
            CategoryFilter::Only(category_id) => self.store.filter_by_category(category_id)?,
        };

        Ok(draw(candidates, filter, previous_ids, rng))
    }
}

/// Picks one question uniformly from those matching `filter` and absent
/// from `previous_ids`.
pub fn draw<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    filter: CategoryFilter,
    previous_ids: &HashSet<i64>,
    rng: &mut R,
) -> QuizDraw {
    let eligible: Vec<Question> = candidates
        .into_iter()
        .filter(|question| filter.matches(question) && !previous_ids.contains(&question.id))
        .collect();

    tracing::debug!(
        "Quiz draw over {} eligible questions ({} excluded)",
        eligible.len(),
        previous_ids.len()
    );

    match eligible.choose(rng) {
        Some(question) => QuizDraw::Next(question.clone()),
        None => QuizDraw::Exhausted,
    }
}
