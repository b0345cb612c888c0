//! # Observability & Tracing
//!
//! Structured logging for the whole workshop. Actors log with an `entity_type` field and
//! client methods open an `#[instrument]` span per call, so one HTTP request reads as a
//! nested trace across the actors it touched.
//!
//! ```bash
//! RUST_LOG=info tailor-workshop serve     # one line per create/update/action
//! RUST_LOG=debug tailor-workshop serve    # full payloads
//! ```
//!
//! Without `RUST_LOG`, the level from the `[log]` config section applies.
//!
//! ```text
//! INFO create_order: Sending create_order to actor
//! INFO Created entity_type="Material" id=material_1 size=1
//! INFO Action ok entity_type="Material" id=material_1
//! INFO Created entity_type="Order" id=order_1 size=1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `default_level` is used when `RUST_LOG` is unset or
/// unparsable.
pub fn setup_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type says where a line came from
        .compact()
        .init();
}
