pub mod dispatcher;
pub mod use_case;

pub use crate::domain::model::{ArticleId, Count, ExecutionMode, ProviderErrorPolicy};
pub use crate::domain::ports::CountProvider;
pub use crate::utils::error::Result;
