//! log macros for unit test logging

/// Writes a debug! message to the test::ut logger
macro_rules! ut_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "test::ut", $($arg)+)
    };
}

/// Writes an info! message to the test::ut logger
macro_rules! ut_info {
    ($($arg:tt)+) => {
        log::info!(target: "test::ut", $($arg)+)
    };
}
