use crate::{
    cli::Cli,
    config::{Config, OutputFormat},
    logging::{format_error_report, init_logging},
    registry::{RegistryError, Segment, SegmentRegistry},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("registry operation failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("could not encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    segments: &'a [Segment],
    total_km: f64,
}

#[derive(Debug, Serialize)]
struct JsonStatus<'a> {
    name: &'a str,
    status: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonTotal {
    total_km: f64,
}

/// Builds a registry from the CLI arguments and returns the text to print.
///
/// Segments are registered first, in argument order, then statuses are applied. The first
/// failing operation aborts the run.
pub fn run(args: &Cli, config: &Config) -> Result<String, CommandError> {
    let mut registry = SegmentRegistry::new();

    for segment in &args.segments {
        registry.add_segment(&segment.name, segment.length_km)?;
    }
    for update in &args.statuses {
        registry.update_status(&update.name, &update.status)?;
    }

    info!(
        event = "registry_loaded",
        segments = registry.len(),
        status_updates = args.statuses.len(),
        total_km = registry.total_length(),
        "registry loaded from arguments"
    );

    let output = args.output.unwrap_or(config.output);
    let rendered = match (&args.query, args.total, output) {
        (Some(name), _, OutputFormat::Text) => registry.get_status(name)?.to_string(),
        (Some(name), _, OutputFormat::Json) => serde_json::to_string(&JsonStatus {
            name,
            status: registry.get_status(name)?,
        })?,
        (None, true, OutputFormat::Text) => crate::registry::format_km(registry.total_length()),
        (None, true, OutputFormat::Json) => serde_json::to_string(&JsonTotal {
            total_km: registry.total_length(),
        })?,
        (None, false, OutputFormat::Text) => registry.generate_report(),
        (None, false, OutputFormat::Json) => serde_json::to_string(&JsonReport {
            segments: &registry.segments(),
            total_km: registry.total_length(),
        })?,
    };

    Ok(rendered)
}

/// Binary entrypoint body; returns the process exit code.
pub fn run_cli(args: Cli, config: Config) -> i32 {
    let run_id = init_logging("bike_lanes", &config.log_level);

    match run(&args, &config) {
        Ok(rendered) => {
            if rendered.ends_with('\n') {
                print!("{rendered}");
            } else {
                println!("{rendered}");
            }
            info!(event = "run_complete", run_id = %run_id, "run completed");
            0
        }
        Err(err) => {
            let error_report = format_error_report(&err);
            error!(
                event = "run_failed",
                run_id = %run_id,
                error = %err,
                error_report = %error_report,
                "run failed"
            );
            eprintln!("{error_report}");
            1
        }
    }
}
