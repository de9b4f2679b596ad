use tracing_subscriber::EnvFilter;

/// Route library events to the test output. Safe to call from every test;
/// only the first call installs the subscriber.
pub fn init_test_tracing() {
    let _installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("brrtrouter_runtime=trace"))
        .with_test_writer()
        .try_init()
        .is_ok();
}
