mod bootstrap;
mod report;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use report_core::settings::Settings;

fn main() -> Result<ExitCode> {
    let settings = Settings::parse();

    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("perf-report v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Report: {}, files: {}",
        settings.report,
        settings.files.len()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let code = report::run(&settings, &mut out);

    Ok(ExitCode::from(code))
}
