use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Install the global tracing subscriber. Logs go to stderr.
///
/// - Level comes from `GH_ORG_REPOS_LOG`, else `RUST_LOG`, else `warn`
///   (`verbose` raises the fallback to `debug`).
/// - `GH_ORG_REPOS_LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing(verbose: bool) {
    let directive = filter_directive(
        std::env::var("GH_ORG_REPOS_LOG").ok(),
        std::env::var("RUST_LOG").ok(),
        verbose,
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(fallback_level(verbose)));

    let use_json = std::env::var("GH_ORG_REPOS_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let result = if use_json {
        let layer = fmt::layer().json().with_target(false).with_writer(std::io::stderr);
        tracing::subscriber::set_global_default(Registry::default().with(filter).with(layer))
    } else {
        let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
        tracing::subscriber::set_global_default(Registry::default().with(filter).with(layer))
    };

    if let Err(err) = result {
        eprintln!("warning: tracing already initialised: {err}");
    }
}

/// Pick the filter directive: the crate variable, then `RUST_LOG`, then the fallback.
/// Blank values count as unset.
fn filter_directive(crate_log: Option<String>, rust_log: Option<String>, verbose: bool) -> String {
    crate_log
        .filter(|v| !v.trim().is_empty())
        .or_else(|| rust_log.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| fallback_level(verbose).to_string())
}

fn fallback_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_variable_wins() {
        let directive = filter_directive(Some("trace".into()), Some("info".into()), false);
        assert_eq!(directive, "trace");
    }

    #[test]
    fn test_rust_log_used_when_crate_variable_unset() {
        assert_eq!(filter_directive(None, Some("info".into()), true), "info");
        assert_eq!(filter_directive(Some("  ".into()), Some("info".into()), false), "info");
    }

    #[test]
    fn test_fallback_depends_on_verbose() {
        assert_eq!(filter_directive(None, None, false), "warn");
        assert_eq!(filter_directive(None, None, true), "debug");
        assert_eq!(filter_directive(None, Some(String::new()), true), "debug");
    }
}
