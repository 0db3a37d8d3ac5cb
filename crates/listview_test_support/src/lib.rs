pub mod fake_services;
pub mod fixtures;

pub use fake_services::{
    FakeDirectory, FakeOwnerChange, FakeOwnerChangeOutcome, FakeQueryOutcome, FakeQueryService,
};

/// Route `log` output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
