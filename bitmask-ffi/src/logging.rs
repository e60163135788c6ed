// Logging bridge to the host's log sink.

use crate::host;

/// Log level constants for the `blog!` macro.
pub const LOG_DISPLAY: u8 = 0;
pub const LOG_WARNING: u8 = 1;
pub const LOG_ERROR: u8 = 2;

/// Forward one line to the registered host. Dropped if no host is registered.
pub fn log_message(level: u8, msg: &str) {
    if let Some(host) = host::host() {
        let len = msg.len().min(u32::MAX as usize);
        (host.log)(level, msg.as_ptr(), len as u32);
    }
}

/// Log a message through the host's log sink.
///
/// Usage:
/// ```ignore
/// blog!(LOG_DISPLAY, "debuffs now {}", debuffs);
/// blog!(LOG_WARNING, "unknown bits {:#x}", extra);
/// ```
///
/// Level constants: `LOG_DISPLAY` (0), `LOG_WARNING` (1), `LOG_ERROR` (2).
#[macro_export]
macro_rules! blog {
    ($level:expr, $($arg:tt)*) => {{
        $crate::logging::log_message($level, &format!($($arg)*));
    }};
}
