//! Miscellaneous utility structs and functions.

use std::fmt::Debug;

use cgmath::num_traits::Float;

/// An interval on the real number line.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T> Interval<T> {
    /// Creates a new interval.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: std::cmp::PartialOrd> Interval<T> {
    /// Returns true if this interval contains the value.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns true if the interval has a positive length.
    pub fn is_proper(&self) -> bool {
        self.min < self.max
    }
}

impl<T: std::ops::Sub<T, Output = T> + Copy> Interval<T> {
    /// Gets the magnitude of the interval.
    pub fn length(&self) -> T {
        self.max - self.min
    }
}

impl<T: Float> Interval<T> {
    /// Creates an interval with the given centre and radius.
    pub fn disc(centre: T, radius: T) -> Self {
        Self {
            min: centre - radius,
            max: centre + radius,
        }
    }

    /// The overlap of two intervals.
    /// Will have a negative length if the intervals are disjoint.
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            min: T::max(self.min, other.min),
            max: T::min(self.max, other.max),
        }
    }
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interval({:?}, {:?})", &self.min, &self.max)
    }
}

#[cfg(test)]
mod test {
    use super::Interval;

    #[test]
    fn disc_is_clamped_by_intersection() {
        let outer = Interval::new(0.0, 10.0);
        assert_eq!(Interval::disc(0.5, 1.0).intersect(&outer), Interval::new(0.0, 1.5));
        assert_eq!(Interval::disc(5.0, 1.0).intersect(&outer), Interval::new(4.0, 6.0));
        assert!(!Interval::new(5.0, 2.0).is_proper());
    }
}
