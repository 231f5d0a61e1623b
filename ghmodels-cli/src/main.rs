//! `ghmodels`: send the fixed conversation to GitHub Models once and print
//! the reply.
//!
//! Reads `GITHUB_TOKEN` (required) and `GITHUB_MODELS_ENDPOINT` (optional).
//! Logs go to stderr and are filtered with `RUST_LOG`; stdout carries only
//! the model output.

use anyhow::Context;
use ghmodels_core::config::process_env;
use ghmodels_core::HttpClient;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ghmodels=warn,ghmodels_core=warn,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let mut stdout = std::io::stdout().lock();
    let output = runtime.block_on(ghmodels_core::run_once(
        process_env,
        |config| HttpClient::with_config(&config.connection),
        &mut stdout,
    ))?;

    tracing::debug!("Run finished with {:?}", output);
    Ok(())
}

/// Single stderr line for a fatal error, causes joined with `: `
fn error_line(err: &anyhow::Error) -> String {
    format!("Error: {:#}", err)
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghmodels_core::config::ConfigError;
    use ghmodels_core::RunnerError;

    #[test]
    fn test_missing_token_is_one_line() {
        let err = anyhow::Error::from(RunnerError::from(ConfigError::MissingCredential {
            var: "GITHUB_TOKEN".to_string(),
        }));
        let line = error_line(&err);

        assert_eq!(
            line,
            "Error: Environment variable 'GITHUB_TOKEN' is not set or is empty"
        );
        assert_eq!(line.matches("GITHUB_TOKEN").count(), 1);
    }

    #[test]
    fn test_cause_chain_is_joined() {
        let err = anyhow::Error::from(RunnerError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "broken pipe",
        )));
        let line = error_line(&err);

        assert_eq!(line, "Error: Failed to write output: broken pipe");
        assert!(!line.contains('\n'));
    }
}
