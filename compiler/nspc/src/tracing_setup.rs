//! Tracing subscriber setup for the `nsp` binary.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber if `RUST_LOG` is set.
///
/// Output is an indented tree on stderr, so function calls nest visibly and
/// program output on stdout stays clean. Calling this more than once is a
/// no-op.
///
/// ```text
/// RUST_LOG=nsp_eval=debug nsp program.nsp
/// RUST_LOG=debug nsp program.nsp
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }
        let layer = tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(layer)
            .init();
    });
}
