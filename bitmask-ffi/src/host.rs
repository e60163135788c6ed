// Host API table storage. Registered once by the host, then read-only.

use std::sync::OnceLock;

use crate::error::BitmaskErrorCode;

/// Function table the host hands to `bitmask_register_host`.
///
/// Only carries a log sink: the register operations need nothing from the
/// host. The table is copied on registration, so the host's instance does
/// not need to outlive the call.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct BitmaskHostApi {
    /// Receives UTF-8 log lines (not NUL-terminated). `level` is one of
    /// `LOG_DISPLAY` (0), `LOG_WARNING` (1), `LOG_ERROR` (2).
    pub log: extern "C" fn(level: u8, msg: *const u8, len: u32),
}

static HOST: OnceLock<BitmaskHostApi> = OnceLock::new();

/// Store the host table. Only the first registration wins.
///
/// # Safety
/// `host` must be null or point to a valid, initialized `BitmaskHostApi`.
pub unsafe fn register_host(host: *const BitmaskHostApi) -> BitmaskErrorCode {
    if host.is_null() {
        return BitmaskErrorCode::NullArgument;
    }
    // SAFETY: non-null checked above; validity is the caller's contract.
    let table = unsafe { *host };
    match HOST.set(table) {
        Ok(()) => BitmaskErrorCode::Ok,
        Err(_) => BitmaskErrorCode::AlreadyRegistered,
    }
}

/// The registered host table, if any.
#[inline]
pub fn host() -> Option<&'static BitmaskHostApi> {
    HOST.get()
}

/// Returns true once a host has been registered.
#[inline]
pub fn is_host_registered() -> bool {
    HOST.get().is_some()
}

/// Capturing host shared by every test in this crate. The host slot is
/// process-global, so tests register through here instead of directly.
#[cfg(test)]
pub(crate) mod test_host {
    use std::sync::{Mutex, Once};

    use super::*;

    static REGISTER: Once = Once::new();
    static LINES: Mutex<Vec<(u8, String)>> = Mutex::new(Vec::new());

    extern "C" fn capture(level: u8, msg: *const u8, len: u32) {
        // SAFETY: log_message always passes a live &str's pointer and length.
        let bytes = unsafe { std::slice::from_raw_parts(msg, len as usize) };
        let line = String::from_utf8_lossy(bytes).into_owned();
        LINES.lock().unwrap().push((level, line));
    }

    pub fn install() {
        REGISTER.call_once(|| {
            let table = BitmaskHostApi { log: capture };
            let code = unsafe { register_host(&table) };
            assert_eq!(code, BitmaskErrorCode::Ok);
        });
    }

    pub fn logged(level: u8, needle: &str) -> bool {
        LINES
            .lock()
            .unwrap()
            .iter()
            .any(|(l, line)| *l == level && line.contains(needle))
    }
}
