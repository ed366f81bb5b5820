use std::fmt;

/// A CSS length used for inline positioning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    /// Percentage in the 0..=100 range.
    Percent(f64),
}

impl Length {
    pub const ZERO: Length = Length::Px(0.0);

    /// Percentage length from a 0..=1 ratio.
    pub fn ratio(ratio: f64) -> Self {
        Self::Percent(ratio * 100.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) if *v == 0.0 => write!(f, "0"),
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(p) => write!(f, "{p:.2}%"),
        }
    }
}
