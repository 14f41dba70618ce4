use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable read after `RUST_LOG`
pub const LOG_ENV: &str = "TFIDF_NEIGHBORS_LOG";

/// Install a stderr fmt subscriber.
///
/// `log_level` wins over `verbose`; both lose to `RUST_LOG` or
/// [`LOG_ENV`] when either is set. A bare level such as `debug` is scoped
/// to this crate, a full directive (`tfidf_neighbors=trace,rayon=warn`) is
/// used as is.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(directive(level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;
    Ok(())
}

fn directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("tfidf_neighbors={level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_is_scoped_to_crate() {
        assert_eq!(directive("debug"), "tfidf_neighbors=debug");
        assert_eq!(directive("rayon=info"), "rayon=info");
    }
}
