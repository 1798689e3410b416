pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::gateway::{GatewayHandler, GatewayRequest, GatewayResponse, CORS_HEADERS};
pub use crate::adapters::provider::{FnCountProvider, HttpCountProvider, InMemoryCountProvider};
pub use crate::core::dispatcher::{dispatch, exec, run_local};
pub use crate::core::use_case::GoodCountUseCase;
pub use crate::domain::model::{
    ArticleId, Count, ErrorCategory, ErrorEnvelope, ExecutionMode, ProviderErrorPolicy,
    SuccessEnvelope,
};
pub use crate::domain::ports::CountProvider;
pub use crate::utils::error::{GoodCountError, Result};
