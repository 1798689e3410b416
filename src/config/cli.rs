use crate::adapters::provider::HttpCountProvider;
use crate::domain::model::ProviderErrorPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "good-count")]
#[command(about = "Serves the good count of an article, locally or behind API Gateway")]
pub struct CliConfig {
    /// Run once for --id and print the result instead of serving
    #[arg(long)]
    pub local: bool,

    /// Article ID for local execution
    #[arg(long, default_value = "")]
    pub id: String,

    /// Base URL of the count service, queried as GET {endpoint}/{article_id}
    #[arg(long, env = "COUNT_ENDPOINT")]
    pub count_endpoint: Option<String>,

    /// What to do when the count service fails
    #[arg(
        long,
        value_enum,
        env = "PROVIDER_ERROR_POLICY",
        default_value_t = ProviderErrorPolicy::Swallow
    )]
    pub provider_errors: ProviderErrorPolicy,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn count_provider(&self) -> Result<HttpCountProvider> {
        let endpoint = validate_required_field("count_endpoint", &self.count_endpoint)?;
        HttpCountProvider::new(endpoint)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let endpoint = validate_required_field("count_endpoint", &self.count_endpoint)?;
        validate_url("count_endpoint", endpoint)?;

        tracing::debug!("CLI configuration validation passed");
        Ok(())
    }
}
