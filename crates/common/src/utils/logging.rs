use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const COMPACT_DEFAULT_FILTER: &str = "info,tower_http=info,axum=info";
const JSON_DEFAULT_FILTER: &str = "info,service::users=debug,service::storage=debug";

/// `RUST_LOG` when set and valid, otherwise `fallback`.
fn filter_or(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Human-readable compact lines on stdout.
/// Falls back to `info,tower_http=info,axum=info` without `RUST_LOG`.
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(filter_or(COMPACT_DEFAULT_FILTER))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize tracing subscriber with JSON structured output.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info` plus `debug` for the local user store, so
///   no-op deletes and collection loads/saves are visible
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(filter_or(JSON_DEFAULT_FILTER))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the output format from `LOG_FORMAT` (`json` or anything else for compact).
pub fn init_logging_from_env() {
    match std::env::var("LOG_FORMAT") {
        Ok(f) if f.eq_ignore_ascii_case("json") => init_logging_json(),
        _ => init_logging_default(),
    }
}
