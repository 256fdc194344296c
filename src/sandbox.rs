// ABOUTME: Least-privilege declaration applied once at startup.
// ABOUTME: Pledges name resolution, network, file read and stdio on OpenBSD.

use crate::error::Result;

/// Capabilities kept for the rest of the run.
#[cfg(target_os = "openbsd")]
pub const PROMISES: &std::ffi::CStr = c"dns inet rpath stdio";

/// Give up every capability except those in [`PROMISES`].
#[cfg(target_os = "openbsd")]
pub fn restrict() -> Result<()> {
    use crate::error::Error;

    // SAFETY: PROMISES is NUL-terminated; a null execpromises leaves them unchanged.
    let rc = unsafe { libc::pledge(PROMISES.as_ptr(), std::ptr::null()) };
    if rc == -1 {
        return Err(Error::Sandbox(std::io::Error::last_os_error()));
    }
    tracing::debug!("process restricted to {:?}", PROMISES);
    Ok(())
}

#[cfg(not(target_os = "openbsd"))]
pub fn restrict() -> Result<()> {
    tracing::debug!("process restriction not available on this platform");
    Ok(())
}
