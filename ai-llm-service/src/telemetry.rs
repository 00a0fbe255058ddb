use std::io::{self, IsTerminal};
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, filter, fmt};

/// Targets rendered by [`layer`]: the playground crates plus HTTP tracing.
pub const TARGET_PREFIXES: &[&str] = &[
    "ai_llm_service",
    "playground_core",
    "api",
    "llm_playground",
    "tower_http",
];

/// RFC3339 UTC timer via `chrono`, e.g. `2025-09-12T10:20:30Z`.
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        w.write_str(&now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
    }
}

/// `true` if `target` is one of ours: an exact prefix or a submodule of one.
pub fn is_playground_target(target: &str) -> bool {
    TARGET_PREFIXES.iter().any(|prefix| {
        target == *prefix
            || target
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with("::"))
    })
}

/// Formatting layer that renders only events emitted by the playground crates.
///
/// - RFC3339 UTC timestamps
/// - Compact single-line format with `file:line` and target
/// - Span close events (durations of instrumented sweeps and calls)
/// - ANSI colors only when stdout is a terminal
///
/// Uses a per-layer filter, so dependencies stay quiet without touching the
/// global subscriber.
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let use_ansi = io::stdout().is_terminal();
    let only_ours = filter::filter_fn(|meta| is_playground_target(meta.target()));

    fmt::layer()
        .with_timer(ChronoRfc3339Utc)
        .with_level(true)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(use_ansi)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .event_format(fmt::format().compact().with_source_location(true))
        .with_filter(only_ours)
}

/// Per-crate level directives, e.g. `playground_core=debug`.
pub fn level_directives(level: Level) -> Vec<Directive> {
    let level = level.as_str().to_lowercase();
    TARGET_PREFIXES
        .iter()
        .filter_map(|prefix| Directive::from_str(&format!("{prefix}={level}")).ok())
        .collect()
}

/// `RUST_LOG` if set, else `default`; then `level` for the playground crates.
///
/// With `default = "info"` and `Level::DEBUG`, dependencies log at INFO and
/// the playground crates at DEBUG.
pub fn env_filter_with_level(default: &str, level: Level) -> EnvFilter {
    let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    level_directives(level)
        .into_iter()
        .fold(base, |filter, directive| filter.add_directive(directive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_match_on_module_boundaries() {
        assert!(is_playground_target("playground_core"));
        assert!(is_playground_target("playground_core::sweep::engine"));
        assert!(is_playground_target("tower_http::trace::on_response"));
        assert!(is_playground_target("api::routes::sweep"));
        assert!(!is_playground_target("apiary"));
        assert!(!is_playground_target("hyper::proto"));
        assert!(!is_playground_target("reqwest::connect"));
    }

    #[test]
    fn one_directive_per_target() {
        let directives = level_directives(Level::DEBUG);
        assert_eq!(directives.len(), TARGET_PREFIXES.len());
        assert_eq!(directives[1].to_string(), "playground_core=debug");
    }
}
