use crate::booking::{SubmissionPhase, TimerKind};
use crate::models::BookingRequest;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter, SetLoggerError};
use std::env;
use std::io::Write;

pub fn parse_level(value: &str) -> LevelFilter {
    match value.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

pub fn init_logging() -> Result<(), SetLoggerError> {
    let log_level = parse_level(&env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()));

    let mut builder = Builder::from_default_env();

    builder.format(|buf, record| {
        let timestamp = buf.timestamp();
        let target = record.target();

        match record.level() {
            Level::Info => writeln!(buf, "{} [INFO] [{}]: {}", timestamp, target, record.args()),
            level => writeln!(
                buf,
                "{} [{}] [{}:{}] {}: {}",
                timestamp,
                level,
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                target,
                record.args()
            ),
        }
    });

    // Renderer crates are chatty at info
    if env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()) == "production" {
        builder.filter_module("wgpu_core", LevelFilter::Warn);
        builder.filter_module("wgpu_hal", LevelFilter::Warn);
        builder.filter_module("naga", LevelFilter::Warn);
        builder.filter_module("iced_wgpu", LevelFilter::Warn);
        builder.filter_module("cosmic_text", LevelFilter::Warn);
    }

    builder.filter_level(log_level).target(Target::Stdout).try_init()
}

pub fn log_error_with_context(error: &anyhow::Error, context: &str) {
    log::error!("[{}] {}", context, error);

    let mut source = error.source();
    while let Some(err) = source {
        log::error!("  Caused by: {}", err);
        source = err.source();
    }
}

pub fn log_phase_transition(from: SubmissionPhase, to: SubmissionPhase) {
    if from != to {
        log::info!("[Booking] {} -> {}", from, to);
    }
}

pub fn log_submission(request: &BookingRequest) {
    log::info!("[Booking] Submitting {}", request.redacted_summary());
}

pub fn log_timer_cancelled(kind: TimerKind) {
    log::debug!("[Timer] {:?} cancelled before firing", kind);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_level("error"), LevelFilter::Error);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level("Debug"), LevelFilter::Debug);
        assert_eq!(parse_level("trace"), LevelFilter::Trace);
        assert_eq!(parse_level("nonsense"), LevelFilter::Info);
    }
}
