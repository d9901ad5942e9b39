//! Tracing setup for the host application.
//!
//! The crate's own targets log at the level named by `THRESHOLDS_LOG`
//! (default `info`); everything else, egui and winit included, is held at
//! `warn`.

use tracing_subscriber::filter::{filter_fn, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

const LOG_LEVEL_ENV: &str = "THRESHOLDS_LOG";
const CRATE_TARGET_PREFIX: &str = "thresholds";

/// Parses a level name, defaulting to `info` for missing or unknown values.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::INFO)
}

/// Installs the global subscriber.
pub fn setup_tracing() {
    let level = parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref());

    let filter_layer = filter_fn(move |metadata| {
        let effective = if metadata.target().starts_with(CRATE_TARGET_PREFIX) {
            level
        } else {
            LevelFilter::WARN
        };
        *metadata.level() <= effective
    });

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter_layer))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::DEBUG);
        assert_eq!(parse_level(Some(" WARN ")), LevelFilter::WARN);
        assert_eq!(parse_level(Some("loud")), LevelFilter::INFO);
        assert_eq!(parse_level(None), LevelFilter::INFO);
    }
}
