// src/timing.rs

use core::time::Duration;

/// Wall-clock budget for one read call, matching the sensor's documented
/// 2-second transmission interval with margin. The deadline is computed
/// once on entry to a read and shared by every retry within that call.
pub const READ_TIMEOUT: Duration = Duration::from_millis(2000);
