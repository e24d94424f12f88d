//! # Observability & Tracing
//!
//! The library only emits `tracing` events; applications decide where they go.
//! [`setup_tracing`] installs the subscriber used by the sample application and is a
//! reasonable default for any binary embedding the resolver.
//!
//! ## What Gets Traced
//!
//! - **Registration**: each registered resource route (`debug`)
//! - **Resolution**: every action's `src`, expanded target URI and verb (`debug`), and a
//!   per-handler summary of declared vs. resolved actions (`debug`)
//! - **Interception**: a span per intercepted call with `uri` and `method`, the named
//!   arguments (`debug`) and the hand-off to the handler (`info`)
//!
//! Actions dropped because their target cannot be resolved are not reported as errors;
//! they only show up as the gap between `declared` and `resolved`.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Hand-offs only
//! RUST_LOG=info cargo run -p siren-sample
//!
//! # Every resolved action
//! RUST_LOG=siren_actions=debug cargo run -p siren-sample
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
