//! Global subscriber installation
//!
//! Kept in its own test binary: `init_tracing` installs a process-wide
//! subscriber, which would otherwise capture events from unrelated tests.

use katabind::logging::{init_tracing, LoggingError};

#[test]
fn test_init_tracing_only_installs_once() {
    init_tracing(0).expect("first install succeeds");

    let second = init_tracing(1);
    assert!(matches!(second, Err(LoggingError::Install(_))));
}
