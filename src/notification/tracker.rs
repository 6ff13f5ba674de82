use tracing::debug;

use crate::notification::types::NotificationState;
use crate::swap::SwapSnapshot;

/// Advances the swap-onset state machine by one sample
///
/// Returns whether a notification should be sent and the state to carry
/// into the next cycle. Fires only on the rising edge (previous used == 0,
/// current used > 0) while idle, and re-arms once used swap drops back to
/// exactly zero. Every other combination leaves the state unchanged.
pub fn observe(
    previous: &SwapSnapshot,
    current: &SwapSnapshot,
    state: NotificationState,
) -> (bool, NotificationState) {
    if previous.used_bytes == 0 && current.used_bytes > 0 && !state.already_notified {
        debug!(used = current.used_bytes, "swap usage started");
        (true, NotificationState { already_notified: true })
    } else if current.used_bytes == 0 && previous.used_bytes > 0 {
        debug!("swap usage returned to zero");
        (false, NotificationState { already_notified: false })
    } else {
        (false, state)
    }
}
