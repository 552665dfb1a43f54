use std::time::Duration;

use super::*;

#[test]
fn test_parse_vm_rss() {
    let status = "Name:\tbench\nVmPeak:\t  20000 kB\nVmRSS:\t   1500 kB\nThreads:\t1\n";
    assert_eq!(parse_vm_rss(status), Some(1500 * 1024));
}

#[test]
fn test_parse_vm_rss_missing() {
    assert_eq!(parse_vm_rss("Name:\tbench\n"), None);
    assert_eq!(parse_vm_rss("VmRSS:\tlots kB\n"), None);
}

#[test]
fn test_monotonic_clock_never_goes_backwards() {
    let clock = MonotonicClock;
    let start = clock.now();
    let end = clock.now();
    assert!(clock.seconds_between(start, end) >= 0.0);
    // Reversed arguments saturate at zero.
    let later = start + Duration::from_millis(5);
    assert_eq!(clock.seconds_between(later, start), 0.0);
}
