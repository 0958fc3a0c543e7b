//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.

#[cfg(unix)]
use libc;


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
#[cfg(unix)]
pub(crate) fn sys_time() -> (i64, i16) {
    use std::mem;

    unsafe {
        let mut tv: libc::timespec = mem::zeroed();
        let _ = libc::clock_gettime(libc::CLOCK_REALTIME, &mut tv);
        (tv.tv_sec as i64, (tv.tv_nsec / 1_000_000) as i16)
    }
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
#[cfg(not(unix))]
pub(crate) fn sys_time() -> (i64, i16) {
    use std::time::{SystemTime, UNIX_EPOCH};

    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => (elapsed.as_secs() as i64, elapsed.subsec_millis() as i16),
        Err(backwards) => {
            let elapsed = backwards.duration();
            (-(elapsed.as_secs() as i64), -(elapsed.subsec_millis() as i16))
        }
    }
}


/// Asks the OS how far east of UTC local civil time was at the given
/// instant, in seconds. Querying per-instant rather than once matters
/// because the answer changes across daylight-saving transitions.
#[cfg(any(target_os = "linux", target_os = "macos", target_os = "ios", target_os = "android"))]
pub(crate) fn sys_utc_offset(seconds_since_1970_epoch: i64) -> i32 {
    use std::mem;

    unsafe {
        let stamp = seconds_since_1970_epoch as libc::time_t;
        let mut tm: libc::tm = mem::zeroed();

        if libc::localtime_r(&stamp, &mut tm).is_null() {
            0
        }
        else {
            tm.tm_gmtoff as i32
        }
    }
}

/// On platforms where we have no way to ask, local time is just UTC.
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "ios", target_os = "android")))]
pub(crate) fn sys_utc_offset(_seconds_since_1970_epoch: i64) -> i32 {
    0
}
