//! Supported word lengths and the try budget for each

/// Shortest isogram the game handles
pub const ABSOLUTE_MIN_LENGTH: usize = 3;

/// Longest isogram the game handles
pub const ABSOLUTE_MAX_LENGTH: usize = 8;

/// Maximum tries indexed by `length - ABSOLUTE_MIN_LENGTH`
const MAX_TRIES: [u32; ABSOLUTE_MAX_LENGTH - ABSOLUTE_MIN_LENGTH + 1] = [5, 8, 10, 15, 18, 22];

/// Range of word lengths available in a loaded dictionary
///
/// Both ends always lie within [`ABSOLUTE_MIN_LENGTH`, `ABSOLUTE_MAX_LENGTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    min: usize,
    max: usize,
}

impl LengthBounds {
    /// Create bounds, clamping both ends into the supported range
    ///
    /// The ends are swapped if given in the wrong order.
    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min: min.clamp(ABSOLUTE_MIN_LENGTH, ABSOLUTE_MAX_LENGTH),
            max: max.clamp(ABSOLUTE_MIN_LENGTH, ABSOLUTE_MAX_LENGTH),
        }
    }

    #[inline]
    #[must_use]
    pub const fn min(self) -> usize {
        self.min
    }

    #[inline]
    #[must_use]
    pub const fn max(self) -> usize {
        self.max
    }

    /// Check whether `length` lies within the bounds (inclusive)
    #[inline]
    #[must_use]
    pub const fn contains(self, length: usize) -> bool {
        length >= self.min && length <= self.max
    }

    /// Iterate over every length within the bounds
    pub fn lengths(self) -> impl Iterator<Item = usize> {
        self.min..=self.max
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min: ABSOLUTE_MIN_LENGTH,
            max: ABSOLUTE_MAX_LENGTH,
        }
    }
}

/// Maximum number of tries allowed for a hidden word of `length` letters
///
/// Lengths outside the supported range are clamped to it first, so a length of 2
/// gets the 3-letter budget and 9 gets the 8-letter budget.
///
/// # Examples
/// ```
/// use bulls_cows::core::max_tries;
///
/// assert_eq!(max_tries(3), 5);
/// assert_eq!(max_tries(6), 15);
/// ```
#[must_use]
pub const fn max_tries(length: usize) -> u32 {
    let clamped = if length < ABSOLUTE_MIN_LENGTH {
        ABSOLUTE_MIN_LENGTH
    } else if length > ABSOLUTE_MAX_LENGTH {
        ABSOLUTE_MAX_LENGTH
    } else {
        length
    };
    MAX_TRIES[clamped - ABSOLUTE_MIN_LENGTH]
}
