/// How a real-valued easing result is turned into an integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Nearest integer, rounding half-way cases away from zero.
    #[default]
    Round,
    /// Largest integer less than or equal to the value.
    Floor,
    /// Smallest integer greater than or equal to the value.
    Ceil,
}

impl RoundingMode {
    /// Convert `value` into an integer.
    ///
    /// Values outside the range of `i32` saturate, and NaN becomes zero.
    ///
    /// # Example
    /// ```
    /// use easetab::RoundingMode;
    ///
    /// assert_eq!(RoundingMode::Round.apply(2.5), 3);
    /// assert_eq!(RoundingMode::Round.apply(-2.5), -3);
    /// assert_eq!(RoundingMode::Floor.apply(-0.2), -1);
    /// assert_eq!(RoundingMode::Ceil.apply(0.2), 1);
    /// ```
    pub fn apply(self, value: f32) -> i32 {
        let rounded = match self {
            RoundingMode::Round => value.round(),
            RoundingMode::Floor => value.floor(),
            RoundingMode::Ceil => value.ceil(),
        };

        rounded as i32
    }
}
