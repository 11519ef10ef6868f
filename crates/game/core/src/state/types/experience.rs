use std::fmt;

/// Experience counter with the threshold for the next level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Experience {
    pub current: u32,
    pub maximum: u32,
}

impl Experience {
    pub const fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    /// Add `amount`; if the threshold is reached, carry the surplus over and
    /// raise the threshold by `threshold_step`.
    ///
    /// Returns `true` when a level was gained. At most one level is gained per
    /// call, whatever the surplus.
    pub fn gain(&mut self, amount: u32, threshold_step: u32) -> bool {
        self.current = self.current.saturating_add(amount);
        if self.current < self.maximum {
            return false;
        }
        self.current -= self.maximum;
        self.maximum = self.maximum.saturating_add(threshold_step);
        true
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} XP", self.current, self.maximum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surplus_carries_over_into_next_level() {
        let mut xp = Experience::new(4, 5);
        assert!(xp.gain(5, 3));
        assert_eq!(xp, Experience::new(4, 8));
    }

    #[test]
    fn exact_threshold_resets_to_zero() {
        let mut xp = Experience::new(0, 5);
        assert!(xp.gain(5, 3));
        assert_eq!(xp, Experience::new(0, 8));
    }

    #[test]
    fn below_threshold_accumulates() {
        let mut xp = Experience::new(1, 8);
        assert!(!xp.gain(5, 3));
        assert_eq!(xp, Experience::new(6, 8));
    }
}
