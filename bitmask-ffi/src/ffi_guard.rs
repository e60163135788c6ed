// FFI boundary guard: wraps exported functions to catch panics before they
// cross the C boundary (which is undefined behavior).

use crate::host::is_host_registered;
use crate::logging::{log_message, LOG_ERROR};

/// Execute `f` and catch any panic, returning `default` on failure.
///
/// Every `extern "C"` function the host calls wraps its body in this guard.
/// If a host is registered, the panic message goes to its log sink.
pub fn ffi_boundary<F, R>(default: R, f: F) -> R
where
    F: FnOnce() -> R + std::panic::UnwindSafe,
{
    match std::panic::catch_unwind(f) {
        Ok(value) => value,
        Err(payload) => {
            if is_host_registered() {
                log_message(LOG_ERROR, &panic_message(&payload));
            }
            default
        }
    }
}

/// Extract a human-readable message from a panic payload.
fn panic_message(payload: &Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("[Bitmask] Rust panic: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("[Bitmask] Rust panic: {s}")
    } else {
        "[Bitmask] Rust panic (unknown payload)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::test_host;

    #[test]
    fn ffi_boundary_returns_value_on_success() {
        let result = ffi_boundary(0i32, || 42);
        assert_eq!(result, 42);
    }

    #[test]
    fn ffi_boundary_returns_default_on_panic() {
        let result = ffi_boundary(-1i32, || {
            panic!("test panic");
        });
        assert_eq!(result, -1);
    }

    #[test]
    fn ffi_boundary_logs_panic_to_host() {
        test_host::install();
        let result = ffi_boundary(false, || -> bool {
            panic!("{}", "guarded flag panic");
        });
        assert!(!result);
        assert!(test_host::logged(LOG_ERROR, "[Bitmask] Rust panic: guarded flag panic"));
    }
}
