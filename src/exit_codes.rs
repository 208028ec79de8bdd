//! Exit code constants and child status propagation for ast-merge.
//!
//! The wrapper's exit status is the compiler's exit status. The constants
//! below only cover the cases where the wrapper itself fails:
//! - 0: Success
//! - 1: Wrapper failure (compiler could not be launched, output relay failed)
//! - 128 + N: Compiler was terminated by signal N (Unix only)

use std::process::ExitStatus;

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// The wrapper failed before or while running the compiler.
pub const WRAPPER_FAILURE: i32 = 1;

/// Base added to the signal number when the compiler was killed by a signal.
pub const SIGNAL_BASE: i32 = 128;

/// Map the compiler's exit status to the wrapper's exit code.
///
/// A normal exit passes its code through unchanged. A signal-terminated
/// child reports `128 + signal`, the same value a POSIX shell would.
pub fn from_status(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return SIGNAL_BASE + signal;
        }
    }

    WRAPPER_FAILURE
}

/// Narrow an exit code to the byte the OS reports to the parent.
pub fn to_exit_byte(code: i32) -> u8 {
    (code & 0xff) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, WRAPPER_FAILURE, SIGNAL_BASE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn to_exit_byte_keeps_low_byte() {
        assert_eq!(to_exit_byte(0), 0);
        assert_eq!(to_exit_byte(1), 1);
        assert_eq!(to_exit_byte(127), 127);
        assert_eq!(to_exit_byte(255), 255);
        assert_eq!(to_exit_byte(256), 0);
        assert_eq!(to_exit_byte(-1), 255);
    }

    #[cfg(unix)]
    #[test]
    fn from_status_passes_exit_codes_through() {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait status: exit code lives in the second byte.
        for code in [0, 1, 2, 127, 255] {
            let status = ExitStatus::from_raw(code << 8);
            assert_eq!(from_status(status), code);
        }
    }

    #[cfg(unix)]
    #[test]
    fn from_status_maps_signals_above_base() {
        use std::os::unix::process::ExitStatusExt;

        // SIGKILL = 9, SIGSEGV = 11
        assert_eq!(from_status(ExitStatus::from_raw(9)), 137);
        assert_eq!(from_status(ExitStatus::from_raw(11)), 139);
    }
}
