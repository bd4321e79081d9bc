use crate::build_info;
use crate::config::OutputFormat;
use clap::Parser;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SegmentArgError {
    #[error("expected NAME=VALUE, got {0:?}")]
    MissingSeparator(String),
    #[error("invalid length {value:?} for segment {name:?}")]
    InvalidLength { name: String, value: String },
}

/// `--segment NAME=KM`. Split at the last `=` so names may contain `=`.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentArg {
    pub name: String,
    pub length_km: f64,
}

/// `--status NAME=STATUS`. Split at the first `=` so statuses may contain `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusArg {
    pub name: String,
    pub status: String,
}

pub fn parse_segment_arg(raw: &str) -> Result<SegmentArg, SegmentArgError> {
    let (name, value) = raw
        .rsplit_once('=')
        .ok_or_else(|| SegmentArgError::MissingSeparator(raw.to_string()))?;
    let length_km = value
        .trim()
        .parse::<f64>()
        .map_err(|_| SegmentArgError::InvalidLength {
            name: name.to_string(),
            value: value.to_string(),
        })?;

    Ok(SegmentArg {
        name: name.to_string(),
        length_km,
    })
}

pub fn parse_status_arg(raw: &str) -> Result<StatusArg, SegmentArgError> {
    let (name, status) = raw
        .split_once('=')
        .ok_or_else(|| SegmentArgError::MissingSeparator(raw.to_string()))?;

    Ok(StatusArg {
        name: name.to_string(),
        status: status.to_string(),
    })
}

#[derive(Parser, Debug)]
#[command(
    about = "Registers bike-lane segments and prints their status report",
    version = build_info::VERSION_WITH_COMMIT,
    long_version = build_info::VERSION_WITH_COMMIT
)]
pub struct Cli {
    #[arg(long = "segment", value_name = "NAME=KM", value_parser = parse_segment_arg)]
    /// Register a segment; repeat for several. Re-registering resets its status
    pub segments: Vec<SegmentArg>,

    #[arg(long = "status", value_name = "NAME=STATUS", value_parser = parse_status_arg)]
    /// Set a segment status after all segments are registered; repeatable
    pub statuses: Vec<StatusArg>,

    #[arg(long, value_name = "NAME", conflicts_with = "total")]
    /// Print only the status of this segment
    pub query: Option<String>,

    #[arg(long)]
    /// Print only the total length in km
    pub total: bool,

    #[arg(long, value_enum)]
    /// Output format; defaults to BIKE_LANES_OUTPUT or text
    pub output: Option<OutputFormat>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
