use hifitime::{Duration, Epoch};

/// Assert that two instants agree to within `tolerance`.
pub fn assert_epoch_close(actual: Epoch, expected: Epoch, tolerance: Duration) {
    let error = (actual - expected).abs();
    assert!(
        error <= tolerance,
        "instants differ by {error}: actual {actual}, expected {expected}"
    );
}
