use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default log directive when `RUST_LOG` does not override it. The engine
/// only emits skip-with-warning diagnostics, so info level stays quiet on
/// clean data.
const DEFAULT_DIRECTIVE: &str = "cashflow_core=info";

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive(
            DEFAULT_DIRECTIVE
                .parse()
                .expect("default log directive is valid"),
        );

        fmt().with_env_filter(filter).init();
    });
}
