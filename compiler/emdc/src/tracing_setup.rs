//! Log output for the CLI.

use std::sync::Once;

/// Environment variable holding the log filter, e.g. `EMD_LOG=emd_eval=trace`.
const LOG_ENV: &str = "EMD_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber.
///
/// The filter comes from `EMD_LOG`, then `RUST_LOG`; `verbose` overrides both
/// with `debug`. With no filter nothing is installed and tracing stays off.
/// Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let directives = if verbose {
            Some("debug".to_string())
        } else {
            std::env::var(LOG_ENV)
                .or_else(|_| std::env::var("RUST_LOG"))
                .ok()
        };
        let Some(directives) = directives else {
            return;
        };

        tracing_subscriber::registry()
            .with(EnvFilter::new(directives))
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_bracketed_fields(true),
            )
            .init();
    });
}
