pub mod pager;
pub mod quiz;
pub mod service;

pub use crate::domain::ports::{ConfigProvider, QuestionStore};
pub use crate::utils::error::Result;
