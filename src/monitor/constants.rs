/// Capacity of the command channel between a `MonitorHandle` and its loop
pub const COMMAND_CHANNEL_CAPACITY: usize = 16;
