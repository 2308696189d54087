//! Shared crate-wide constants.

use std::time::Duration;

/// How long the event loop blocks waiting for input before ticking.
pub const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Content lines moved per mouse wheel notch.
pub const SCROLL_STEP: isize = 3;
