//! log macro's for estimator logging

/// Writes a debug! message to the app::estimator logger
#[macro_export]
macro_rules! estimator_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::estimator", $($arg)+)
    };
}

/// Writes an info! message to the app::estimator logger
#[macro_export]
macro_rules! estimator_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::estimator", $($arg)+)
    };
}

/// Writes an warn! message to the app::estimator logger
#[macro_export]
macro_rules! estimator_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "app::estimator", $($arg)+)
    };
}

/// Writes an error! message to the app::estimator logger
#[macro_export]
macro_rules! estimator_error {
    ($($arg:tt)+) => {
        log::error!(target: "app::estimator", $($arg)+)
    };
}
