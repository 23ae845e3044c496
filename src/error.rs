use core::fmt;

/// Errors raised while setting up a roulette wheel.
///
/// All of these are configuration errors: a wheel that fails
/// setup is never constructed, so it can never be spun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouletteError {
    /// The wheel has no segments.
    EmptyWheel,
    /// The spin duration is not a positive number of seconds that fits a
    /// nonzero [`Duration`](std::time::Duration).
    InvalidDuration(f32),
    /// The landing padding is outside of `[0, 1)`.
    InvalidPadding(f32),
    /// The revolutions per second are negative or not finite.
    InvalidRevolutions(f32),
}

impl fmt::Display for RouletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWheel => write!(f, "roulette wheel must have at least one segment"),
            Self::InvalidDuration(d) => {
                write!(f, "spin duration must be a positive number of seconds, got {d}")
            }
            Self::InvalidPadding(p) => {
                write!(f, "landing padding must be within [0, 1), got {p}")
            }
            Self::InvalidRevolutions(r) => {
                write!(f, "revolutions per second must be finite and not negative, got {r}")
            }
        }
    }
}

impl std::error::Error for RouletteError {}
