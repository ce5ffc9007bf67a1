use deploy_utils::cli::WaitArgs;
use deploy_utils::prelude::*;
use deploy_utils::shared::error::exit_code_for;
use deploy_utils::shared::logging::init_tracing;
use std::process;
use tokio_util::sync::CancellationToken;

const TAG: &str = "wait-for-db";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let started_at = tokio::time::Instant::now();
    WaitArgs::parse_args();
    init_tracing();

    let reporter = StderrProgressReporter::new(TAG);

    let exit_code = match run(started_at, reporter.clone()).await {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            reporter.report_error(&e.to_string());
            exit_code_for(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run(
    started_at: tokio::time::Instant,
    reporter: StderrProgressReporter,
) -> Result<WaitOutcome> {
    let config = WaitConfig::from_env()?;
    tracing::debug!(dsn = %config.target.redacted(), "resolved connection target");

    let probe = PostgresProbe::new(&config.target, &config.tls);

    let stop = CancellationToken::new();
    let listener = spawn_signal_listener(stop.clone())
        .map_err(|e| anyhow::anyhow!("Failed to install signal handlers: {}", e))?;

    let use_case = WaitForDatabaseUseCase::new(probe, reporter);
    let outcome = use_case
        .execute(WaitRequest::new(&config, started_at), &stop)
        .await;

    // Release the listener task
    stop.cancel();
    let _ = listener.await;

    tracing::debug!(?outcome, "wait finished");
    Ok(outcome)
}
