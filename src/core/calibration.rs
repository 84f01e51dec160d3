/// One-shot, re-armable calibration deadline driven by a millisecond clock.
///
/// At most one calibration is ever pending: queueing again replaces the
/// previous deadline. Time comes from the caller (`performance.now()` or an
/// animation-frame timestamp in the browser, plain numbers in tests).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CalibrationTimer {
    deadline_ms: Option<f64>,
}

impl CalibrationTimer {
    pub fn queue(&mut self, now_ms: f64, delay_ms: f64) {
        self.deadline_ms = Some(now_ms + delay_ms.max(0.0));
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<f64> {
        self.deadline_ms
    }

    /// True exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
