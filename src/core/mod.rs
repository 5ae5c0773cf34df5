pub mod etl;
pub mod pages;
pub mod pipeline;

pub use crate::domain::model::{LoadSummary, WordRecord};
pub use crate::domain::ports::{ConfigProvider, MutationClient, Pipeline, Storage};
pub use crate::utils::error::Result;
