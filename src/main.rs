use clap::Parser;
use good_count::utils::{logger, validation::Validate};
use good_count::{dispatch, CliConfig, ExecutionMode};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // Resolved once; nothing runs on a bad combination of flags.
    let mode = match ExecutionMode::resolve(config.local, &config.id) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    match mode {
        ExecutionMode::Local { .. } => logger::init_cli_logger(config.verbose),
        ExecutionMode::Service => logger::init_lambda_logger(),
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let provider = match config.count_provider() {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let mut stdout = std::io::stdout();
    if let Err(e) = dispatch(mode, provider, config.provider_errors, &mut stdout).await {
        tracing::error!("good-count failed: {} (kind: {:?})", e, e.kind());
        std::process::exit(e.exit_code());
    }
}
