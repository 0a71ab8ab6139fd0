// Launch worker constants (no magic values)
use std::time::Duration;

/// How long one blocking dequeue waits before the worker loops (500ms)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Pause after an unexpected queue error before polling again (1s)
pub const ERROR_RECOVERY_SLEEP_DURATION: Duration = Duration::from_secs(1);
