use crate::adapters::gateway::GatewayHandler;
use crate::core::use_case::GoodCountUseCase;
use crate::core::CountProvider;
use crate::domain::model::{ArticleId, ExecutionMode, ProviderErrorPolicy};
use crate::utils::error::{GoodCountError, Result};
use std::io::Write;

impl ExecutionMode {
    pub const MISSING_ID_MESSAGE: &'static str = "local execution requested without an ID";

    /// Resolves the execution mode from the startup flags.
    ///
    /// The ID is ignored unless `local` is set.
    pub fn resolve(local: bool, id: &str) -> Result<Self> {
        if !local {
            return Ok(Self::Service);
        }

        let article_id =
            ArticleId::new(id).map_err(|_| GoodCountError::config(Self::MISSING_ID_MESSAGE))?;
        Ok(Self::Local { article_id })
    }
}

/// Runs the use-case once and writes the outcome as one line to `out`.
///
/// On failure the error description is written instead and the error is
/// returned, so the caller can pick an exit code.
pub async fn run_local<P, W>(
    use_case: &GoodCountUseCase<P>,
    article_id: &ArticleId,
    out: &mut W,
) -> Result<()>
where
    P: CountProvider,
    W: Write,
{
    match use_case.execute(article_id).await {
        Ok(body) => {
            writeln!(out, "{}", body)?;
            Ok(())
        }
        Err(e) => {
            writeln!(out, "{}", e)?;
            Err(e)
        }
    }
}

/// Resolves the execution mode and runs it.
///
/// A misconfigured local run fails here, before the provider is touched.
pub async fn exec<P, W>(
    local: bool,
    id: &str,
    provider: P,
    policy: ProviderErrorPolicy,
    out: &mut W,
) -> Result<()>
where
    P: CountProvider + 'static,
    W: Write,
{
    let mode = ExecutionMode::resolve(local, id)?;
    dispatch(mode, provider, policy, out).await
}

/// Runs an already resolved execution mode.
pub async fn dispatch<P, W>(
    mode: ExecutionMode,
    provider: P,
    policy: ProviderErrorPolicy,
    out: &mut W,
) -> Result<()>
where
    P: CountProvider + 'static,
    W: Write,
{
    let use_case = GoodCountUseCase::new(provider, policy);

    match mode {
        ExecutionMode::Local { article_id } => {
            tracing::info!(article_id = %article_id, "running in local mode");
            run_local(&use_case, &article_id, out).await
        }
        ExecutionMode::Service => {
            tracing::info!(policy = ?policy, "running in production mode");
            serve(GatewayHandler::new(use_case)).await
        }
    }
}

#[cfg(feature = "lambda")]
async fn serve<P: CountProvider + 'static>(handler: GatewayHandler<P>) -> Result<()> {
    crate::adapters::lambda::serve(handler).await
}

#[cfg(not(feature = "lambda"))]
async fn serve<P: CountProvider + 'static>(_handler: GatewayHandler<P>) -> Result<()> {
    Err(GoodCountError::config(
        "service mode requires the `lambda` feature",
    ))
}
