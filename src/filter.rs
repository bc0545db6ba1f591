// AttitudeWatch - Sample Aggregator
//
// Collapses one accelerometer batch into a smoothed triple with a boxcar
// mean.  The driver already delivers samples in batches of five at 100 Hz,
// so the window is 50 ms.

use crate::events::RawSample;

/// Per-axis integer mean of one batch, milli-g.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Smoothed {
    pub ax: i16,
    pub ay: i16,
    pub az: i16,
}

impl Smoothed {
    /// True when any axis mean is strictly beyond `threshold` in magnitude.
    pub fn exceeds(&self, threshold: i16) -> bool {
        [self.ax, self.ay, self.az]
            .iter()
            .any(|&c| c > threshold || c < -threshold)
    }
}

/// Mean of each axis over `batch`, truncating toward zero.
///
/// Returns `None` for an empty batch; callers skip it.
pub fn aggregate(batch: &[RawSample]) -> Option<Smoothed> {
    if batch.is_empty() {
        return None;
    }

    let (sx, sy, sz) = batch.iter().fold((0i32, 0i32, 0i32), |(x, y, z), s| {
        (x + s.x as i32, y + s.y as i32, z + s.z as i32)
    });
    let n = batch.len() as i32;

    // The mean of i16 values always fits back into i16.
    Some(Smoothed {
        ax: (sx / n) as i16,
        ay: (sy / n) as i16,
        az: (sz / n) as i16,
    })
}
