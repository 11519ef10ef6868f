use std::fmt;

/// Health pool tracked as a current value bounded by a maximum.
///
/// Every mutation keeps `current` inside `[0, maximum]`, so observers never
/// see negative health even when an incoming damage value is negative.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthMeter {
    pub current: f64,
    pub maximum: f64,
}

impl HealthMeter {
    pub fn new(current: f64, maximum: f64) -> Self {
        let maximum = maximum.max(0.0);
        Self {
            current: current.clamp(0.0, maximum),
            maximum,
        }
    }

    /// Create a meter filled to its maximum.
    pub fn full(maximum: f64) -> Self {
        Self::new(maximum, maximum)
    }

    /// Subtract `damage` and return the health left afterwards.
    ///
    /// The damage value itself is taken as-is (it may be negative); only the
    /// resulting health is clamped.
    pub fn apply_damage(&mut self, damage: f64) -> f64 {
        self.current = (self.current - damage).clamp(0.0, self.maximum);
        self.current
    }

    /// Raise the maximum and heal by the same amount.
    pub fn raise_maximum(&mut self, amount: f64) {
        self.maximum += amount;
        self.current = (self.current + amount).clamp(0.0, self.maximum);
    }

    /// True once health has dropped to zero.
    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}

impl fmt::Display for HealthMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} / {:.1}", self.current, self.maximum)
    }
}
