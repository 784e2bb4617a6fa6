pub mod shape;

#[cfg(test)]
mod properties;

/// Routes library `tracing` output through the test harness' captured stdout.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}
