//! Logging macros shared by every `fleetsync` crate.
//!
//! They are thin wrappers over `tracing` events. The CLI formatter picks a symbol per
//! level, and renders events sent to [`SUCCESS_TARGET`] as successes.

/// Target used by [`success!`](crate::success) events.
pub const SUCCESS_TARGET: &str = "fleetsync::success";

/// Target used for raw terminal output that bypasses the level symbols.
pub const PRINT_TARGET: &str = "fleetsync::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::__tracing::info!($($arg)+)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::__tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::__tracing::warn!($($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::__tracing::error!($($arg)+)
    };
}
