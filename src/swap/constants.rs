/// Utility that prints the aggregate swap usage
pub const SWAP_UTILITY_PATH: &str = "/usr/sbin/sysctl";

/// Arguments passed to [`SWAP_UTILITY_PATH`]
pub const SWAP_UTILITY_ARGS: [&str; 2] = ["-n", "vm.swapusage"];

/// Token positions in `total = <N>M used = <N>M free = <N>M`
pub const TOTAL_TOKEN_INDEX: usize = 2;
pub const USED_TOKEN_INDEX: usize = 5;
pub const FREE_TOKEN_INDEX: usize = 8;

/// Unit suffix on each size token
pub const MEGABYTE_SUFFIX: char = 'M';
