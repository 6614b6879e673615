//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! - **Filtering** from the `RUST_LOG` environment variable (`EnvFilter`).
//! - **Compact format** without module targets; the actor loop records `entity_type`
//!   as a field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle: Created / Action ok / Deleted
//! RUST_LOG=debug cargo run    # plus request payloads
//! ```
//!
//! With `RUST_LOG=info` an order session reads like:
//!
//! ```text
//! INFO Actor started entity_type="OrderSession"
//! INFO Created entity_type="OrderSession" id=session_1 size=1
//! INFO select_pack: Action ok entity_type="OrderSession" id=session_1
//! ```

/// Initializes the tracing subscriber. Call once, at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
