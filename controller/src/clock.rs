use std::time::Duration;

/// Turns host frame timestamps into bounded physics deltas.
///
/// The first frame, and any frame whose timestamp is not after the previous
/// one, yields a zero delta. Deltas above `max_delta` are capped so a stalled
/// frame cannot become one huge step.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    last: Option<Duration>,
    max_delta: f32,
}

/// One frame's delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameDelta {
    /// Seconds to integrate, in `0.0..=max_delta`.
    pub seconds: f32,
    /// The measured delta exceeded `max_delta`.
    pub clamped: bool,
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            last: None,
            max_delta: max_delta.max(0.0),
        }
    }

    /// Record `now` and return the delta since the previous call.
    pub fn advance(&mut self, now: Duration) -> FrameDelta {
        let raw = self
            .last
            .and_then(|last| now.checked_sub(last))
            .map(|dur| dur.as_secs_f32())
            .unwrap_or(0.0);
        self.last = Some(now);

        if raw > self.max_delta {
            log::warn!(
                "frame delta {raw:.3}s exceeds {:.3}s, clamping",
                self.max_delta
            );
            return FrameDelta {
                seconds: self.max_delta,
                clamped: true,
            };
        }

        FrameDelta {
            seconds: raw,
            clamped: false,
        }
    }

    /// Timestamp of the previous frame, if any.
    pub fn last(&self) -> Option<Duration> {
        self.last
    }

    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }
}
