//! Tracing configuration for Creator Cards
//!
//! ## Behavior / 行为
//!
//! - **Development**: debug level for the card crates, outputs to stderr
//! - **Production**: info level
//! - **Environment filter**: `RUST_LOG` overrides the defaults
//!
//! Logs go to stderr so that rendered cards on stdout stay clean.

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// HTTP internals (hyper, reqwest) stay at warn to keep the output readable.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let crate_level = if is_dev { "debug" } else { "info" };
    vec![
        "info".to_string(),
        "hyper=warn".to_string(),
        "hyper_util=warn".to_string(),
        "reqwest=warn".to_string(),
        format!("creator_cards={crate_level}"),
        format!("creator_cards_lib={crate_level}"),
        format!("cc_core={crate_level}"),
        format!("cc_app={crate_level}"),
        format!("cc_infra={crate_level}"),
    ]
}

/// Initialize the tracing subscriber
///
/// Call once from `main` before any card is built.
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    // "2026-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}
