use qcid_core::config::{INTAKE_ENV, LOG_ENV};
use qcid_core::{IntakeSheet, RunConfig, validate_intake, validate_phone, validate_ramq};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Demonstration entry point for the qcid validators
///
/// Prints the result of validating a sample phone number and a sample RAMQ number, then
/// validates an intake sheet if one is configured.
///
/// # Environment Variables
/// - `QCID_INTAKE`: path to a YAML intake sheet to validate (optional)
/// - `QCID_LOG`: tracing filter directives (default: "qcid=info")
///
/// # Returns
/// * `Ok(())` - If the samples ran and any configured sheet was read
/// * `Err(anyhow::Error)` - If logging setup fails or the intake sheet cannot be loaded
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = RunConfig::from_env_values(
        std::env::var(INTAKE_ENV).ok(),
        std::env::var(LOG_ENV).ok(),
    );

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(config.log_filter())?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let sample_phone = "418 666-6666";
    println!("{}", validate_phone(sample_phone));

    println!(
        "{}",
        validate_ramq("POIG 9758 0316", "Poitras", "Ginette", 3, 8, 1997, 'F')
    );

    if let Some(path) = config.intake_path() {
        tracing::info!("++ Validating intake sheet {}", path.display());
        let data = IntakeSheet::load(path)?;
        let report = validate_intake(&data);
        for outcome in report.phones.iter().chain(report.ramq.iter()) {
            if let Some(reason) = &outcome.reason {
                tracing::warn!(input = %outcome.input, %reason, "invalid entry");
            }
        }
        tracing::info!(
            valid = report.valid_count(),
            invalid = report.invalid_count(),
            "intake sheet validated"
        );
    }

    Ok(())
}
