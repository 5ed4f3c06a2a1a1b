//! Integration tests for the public queue API.
//!
//! Run with: `cargo test --test integration`

mod priority_queue;
mod queue_trait;
mod ring_buffer;

/// Routes `tracing` output through the test harness. Set `RUST_LOG=debug`
/// to see reallocation events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
