/// Divisor applied to cached bytes when estimating app memory
///
/// App memory is approximated as `active - cached / APP_MEMORY_CACHE_DIVISOR`.
pub const APP_MEMORY_CACHE_DIVISOR: u64 = 2;

/// Default usage percentage at which the usage bar turns to warning
pub const DEFAULT_WARNING_THRESHOLD: u64 = 60;

/// Default usage percentage at which the usage bar turns to critical
pub const DEFAULT_CRITICAL_THRESHOLD: u64 = 80;
