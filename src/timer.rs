/// Result of a single timer decrement
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerState {
    /// Counting down, not yet at zero
    On,
    /// Already at zero, nothing to do
    Off,
    /// This decrement brought the value to zero
    Finished,
}

/// An 8-bit countdown timer
///
/// Decremented only by the external tick, never by instruction
/// execution; floors at zero with no wraparound.
#[derive(Debug)]
pub struct Timer(u8);

impl Timer {
    pub fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub fn store(&mut self, value: u8) {
        self.0 = value;
    }

    #[inline]
    pub fn load(&self) -> u8 {
        self.0
    }

    #[inline]
    pub fn decrement(&mut self) -> TimerState {
        if self.0 > 0 {
            self.0 -= 1;
            if self.0 == 0 {
                TimerState::Finished
            } else {
                TimerState::On
            }
        } else {
            TimerState::Off
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_zero_and_stays() {
        let mut timer = Timer::new();
        timer.store(3);
        assert_eq!(timer.decrement(), TimerState::On);
        assert_eq!(timer.decrement(), TimerState::On);
        assert_eq!(timer.decrement(), TimerState::Finished);
        assert_eq!(timer.load(), 0);
        assert_eq!(timer.decrement(), TimerState::Off);
        assert_eq!(timer.load(), 0);
    }

    #[test]
    fn store_and_load() {
        let mut timer = Timer::new();
        assert_eq!(timer.load(), 0);
        timer.store(0xFF);
        assert_eq!(timer.load(), 0xFF);
    }
}
