/// Samples the process's resident memory in KB, best-effort.
///
/// Uses the `getrusage(2)` max RSS on Unix and the working-set size on
/// Windows; elsewhere it returns a constant 0. The figure is advisory,
/// good enough for coarse before/after deltas, not an accounting guarantee.
#[cfg(unix)]
pub fn sample_rss_kb() -> u64 {
    // Safety: getrusage only writes into the struct we hand it.
    unsafe {
        let mut usage: libc::rusage = std::mem::zeroed();
        if libc::getrusage(libc::RUSAGE_SELF, &mut usage) != 0 {
            return 0;
        }
        // ru_maxrss is reported in KB on Linux; the unit only matters for
        // deltas here, so other Unixes are close enough.
        usage.ru_maxrss.max(0) as u64
    }
}

/// Samples the process's resident memory in KB, best-effort.
#[cfg(windows)]
pub fn sample_rss_kb() -> u64 {
    use windows_sys::Win32::System::ProcessStatus::{
        K32GetProcessMemoryInfo, PROCESS_MEMORY_COUNTERS,
    };
    use windows_sys::Win32::System::Threading::GetCurrentProcess;

    // Safety: the counters struct is plain data sized for the call.
    unsafe {
        let mut counters: PROCESS_MEMORY_COUNTERS = std::mem::zeroed();
        counters.cb = std::mem::size_of::<PROCESS_MEMORY_COUNTERS>() as u32;
        if K32GetProcessMemoryInfo(GetCurrentProcess(), &mut counters, counters.cb) == 0 {
            return 0;
        }
        (counters.WorkingSetSize / 1024) as u64
    }
}

/// Samples the process's resident memory in KB.
///
/// No reliable primitive on this platform; always 0.
#[cfg(not(any(unix, windows)))]
pub fn sample_rss_kb() -> u64 {
    0
}
