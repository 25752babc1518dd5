//! Animation progress: time to bounded, cyclically-resetting reveal fraction.

use num_traits::Float;

use super::*;

/// Map a monotonically increasing `time` onto a reveal fraction in `[0, 1]`.
///
/// The cycle wraps every `period`: the fraction rises linearly from 0 to 1
/// over the first `rise_fraction` of the period, then holds at 1 until the
/// wrap. Pure function of its inputs; the caller supplies the clock.
pub fn reveal_fraction<T>(time: T, period: T, rise_fraction: T) -> T
where
    T: Float,
{
    let mut wrapped = time % period;
    if wrapped < T::zero() {
        wrapped = wrapped + period.abs();
    }
    let phase = wrapped / period;
    (phase / rise_fraction).min(T::one()).max(T::zero())
}

/// A named reveal cycle: period length, the fraction of it spent revealing,
/// and a clock offset determining where in the cycle `time = 0` lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealCycle<T> {
    pub period: T,
    pub rise_fraction: T,
    pub time_offset: T,
}

impl<T> RevealCycle<T>
where
    T: Float,
{
    pub fn new(period: T, rise_fraction: T, time_offset: T) -> Self {
        RevealCycle {
            period,
            rise_fraction,
            time_offset,
        }
    }

    /// Reveal fraction at `time` seconds.
    pub fn fraction_at(&self, time: T) -> T {
        reveal_fraction(self.time_offset + time, self.period, self.rise_fraction)
    }
}

/// Defaults reproduce the demo cycle: a 13.13 s period that spends the
/// first 10.1 s revealing and the rest fully drawn, with the clock offset
/// so that `time = 0` starts 12 s into the cycle.
impl<T> Default for RevealCycle<T>
where
    T: Float,
{
    fn default() -> Self {
        RevealCycle {
            period: T::from(13.13).unwrap(),
            rise_fraction: T::from(1.0 / 1.3).unwrap(),
            time_offset: T::from(12.0).unwrap(),
        }
    }
}
