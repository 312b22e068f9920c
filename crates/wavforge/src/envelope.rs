//! Linear fade envelope for tone boundaries.
//!
//! Each tone rises linearly over its first quarter, holds full amplitude,
//! and falls linearly over its last quarter. The wings remove the audible
//! click a hard-edged sine would produce at the start and end of a tone.

/// Fraction of a tone spent fading in and fading out.
pub const WING_FRACTION: f64 = 0.25;

/// Fade-in / hold / fade-out envelope over a fixed number of frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeEnvelope {
    total_frames: f64,
    raise_wing: f64,
    drop_wing: f64,
}

impl FadeEnvelope {
    /// Creates an envelope spanning `total_frames` frames.
    pub fn new(total_frames: usize) -> Self {
        let total_frames = total_frames as f64;
        Self {
            total_frames,
            raise_wing: total_frames * WING_FRACTION,
            drop_wing: total_frames * WING_FRACTION,
        }
    }

    /// Amplitude multiplier in `[0.0, 1.0]` for frame `index`.
    pub fn ratio(&self, index: usize) -> f64 {
        let i = index as f64;
        let remaining = self.total_frames - i;

        if self.raise_wing > 0.0 && i < self.raise_wing {
            i / self.raise_wing
        } else if self.drop_wing > 0.0 && self.drop_wing >= remaining {
            remaining / self.drop_wing
        } else {
            1.0
        }
    }
}

/// Amplitude multiplier for frame `index` of a tone lasting `total_frames`.
pub fn fade_ratio(index: usize, total_frames: usize) -> f64 {
    FadeEnvelope::new(total_frames).ratio(index)
}
