//! Low-level stdin access for the probe.
//!
//! Reads go straight to the stdin file descriptor rather than through the
//! standard library's buffered handle: `poll(2)` reports kernel-side
//! readability, and a userspace buffer would make the idle-gap check lie.

use std::io;
use std::time::Duration;

/// Wait up to `timeout` for a byte to become readable on stdin.
///
/// Returns `Ok(false)` on timeout or when the wait was interrupted by a
/// signal; the caller re-checks its interrupt flag between waits.
pub fn poll_stdin(timeout: Duration) -> io::Result<bool> {
    let mut fds = libc::pollfd {
        fd: libc::STDIN_FILENO,
        events: libc::POLLIN,
        revents: 0,
    };
    let timeout_ms = timeout.as_millis().min(i32::MAX as u128) as libc::c_int;

    let ret = unsafe { libc::poll(&mut fds, 1, timeout_ms) };
    if ret < 0 {
        let err = io::Error::last_os_error();
        if err.kind() == io::ErrorKind::Interrupted {
            return Ok(false);
        }
        return Err(err);
    }

    Ok(ret > 0 && fds.revents & libc::POLLIN != 0)
}

/// Read a single byte from stdin.
///
/// Returns `Ok(None)` on end of input. Retries reads interrupted by signals.
pub fn read_stdin_byte() -> io::Result<Option<u8>> {
    let mut byte = 0u8;
    loop {
        let n = unsafe {
            libc::read(
                libc::STDIN_FILENO,
                &mut byte as *mut u8 as *mut libc::c_void,
                1,
            )
        };
        match n {
            1 => return Ok(Some(byte)),
            0 => return Ok(None),
            _ => {
                let err = io::Error::last_os_error();
                if err.kind() != io::ErrorKind::Interrupted {
                    return Err(err);
                }
            }
        }
    }
}
