//! Running statistics from raw moments (count, extrema, sum, sum of squares)
//!
//! Every operation except bulk insertion is O(1), and the accumulator keeps a
//! fixed handful of aggregates no matter how many values it has seen.

use core::cmp::Ordering;
use core::iter::Sum;

use num_traits::Zero;

use crate::measurement::{DivCount, Measurement};
use crate::traits::Summary;

/// Running statistics over a stream of measurements
///
/// Tracks the count, the most recent value, the minimum, the maximum, the sum
/// and the sum of squares. Mean, population variance and standard deviation
/// are derived from those on demand. Individual samples are never stored.
///
/// Variance is computed from raw moments, `E[X²] - E[X]²`, divided by the full
/// count (no Bessel correction). For floating point populations whose spread
/// is tiny compared to their magnitude this loses precision and can even come
/// out slightly negative.
///
/// # Example
///
/// ```
/// use runstats::statistics::Accumulator;
///
/// let mut stats: Accumulator<f64> = Accumulator::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.insert(value);
/// }
///
/// assert_eq!(stats.count(), 8);
/// assert_eq!(stats.latest(), 9.0);
/// assert!((stats.mean() - 5.0).abs() < 1e-12);
/// assert!((stats.variance() - 4.0).abs() < 1e-12);
/// assert!((stats.standard_deviation() - 2.0).abs() < 1e-12);
/// assert_eq!(stats.min(), 2.0);
/// assert_eq!(stats.max(), 9.0);
/// ```
///
/// # Distributed Usage
///
/// ```
/// use runstats::statistics::Accumulator;
///
/// // Each worker owns its own accumulator
/// let shard1: Accumulator<f64> = [1.0, 2.0].into_iter().collect();
/// let shard2: Accumulator<f64> = [3.0, 4.0].into_iter().collect();
///
/// let total = shard1.combined(&shard2);
/// assert_eq!(total.count(), 4);
/// assert_eq!(total.sum(), 10.0);
/// assert_eq!(total.mean(), 2.5);
/// ```
///
/// # Extremum updates
///
/// By default each inserted value is checked against both the minimum and the
/// maximum. With the `legacy-extrema` feature the maximum is only checked when
/// the value is not a new minimum. Output then stays bit-for-bit compatible
/// with `else if` accumulators, at the cost that the first value inserted into
/// an empty accumulator leaves the maximum at its sentinel.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize, T::Squared: serde::Serialize",
        deserialize = "T: serde::Deserialize<'de>, T::Squared: serde::Deserialize<'de>"
    ))
)]
pub struct Accumulator<T: Measurement> {
    /// Number of values seen
    count: u64,
    /// Most recently inserted value
    latest: T,
    /// Minimum value, `T::max_value()` while empty
    min: T,
    /// Maximum value, `T::min_value()` while empty
    max: T,
    /// Sum of all values
    sum: T,
    /// Sum of each value multiplied by itself
    sum_of_squares: T::Squared,
}

impl<T: Measurement> Default for Accumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Measurement> Accumulator<T> {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            latest: Zero::zero(),
            min: T::max_value(),
            max: T::min_value(),
            sum: Zero::zero(),
            sum_of_squares: Zero::zero(),
        }
    }

    /// Create an accumulator holding a single measurement
    pub fn with_measurement(measurement: T) -> Self {
        Self {
            count: 1,
            latest: measurement,
            min: measurement,
            max: measurement,
            sum: measurement,
            sum_of_squares: measurement.square(),
        }
    }

    /// Create an accumulator from a sequence of measurements, inserted in order
    pub fn from_measurements<I>(measurements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut stats = Self::new();
        stats.insert_all(measurements);
        stats
    }

    /// Insert a measurement into the population
    pub fn insert(&mut self, measurement: T) -> &mut Self {
        self.latest = measurement;
        self.update_extrema(measurement);
        self.sum = self.sum + measurement;
        self.sum_of_squares = self.sum_of_squares + measurement.square();
        self.count += 1;
        self
    }

    #[cfg(not(feature = "legacy-extrema"))]
    #[inline]
    fn update_extrema(&mut self, measurement: T) {
        if measurement < self.min {
            self.min = measurement;
        }
        if measurement > self.max {
            self.max = measurement;
        }
    }

    #[cfg(feature = "legacy-extrema")]
    #[inline]
    fn update_extrema(&mut self, measurement: T) {
        if measurement < self.min {
            self.min = measurement;
        } else if measurement > self.max {
            self.max = measurement;
        }
    }

    /// Insert every measurement of a sequence, in order
    ///
    /// O(n) in the length of the sequence.
    pub fn insert_all<I>(&mut self, measurements: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        for measurement in measurements {
            self.insert(measurement);
        }
        self
    }

    /// Consume the accumulator and return it with one more measurement
    #[must_use]
    pub fn with(mut self, measurement: T) -> Self {
        self.insert(measurement);
        self
    }

    /// Absorb the aggregates of another accumulator
    ///
    /// Count, sum, sum of squares and extrema combine as if every value of
    /// `other` had been inserted here. `latest` becomes `other.latest()`, so
    /// merging is not symmetric in that one field.
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(count = self.count, other = other.count, "merging accumulator");

        self.count += other.count;
        self.latest = other.latest;
        if other.max > self.max {
            self.max = other.max;
        }
        if other.min < self.min {
            self.min = other.min;
        }
        self.sum = self.sum + other.sum;
        self.sum_of_squares = self.sum_of_squares + other.sum_of_squares;
        self
    }

    /// Pool two populations into a new accumulator, leaving both inputs intact
    #[must_use]
    pub fn combined(&self, other: &Self) -> Self {
        let mut stats = *self;
        stats.merge(other);
        stats
    }

    /// Reset to the empty state
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(count = self.count, "clearing accumulator");

        *self = Self::new();
    }

    /// Number of measurements taken
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Most recent measurement, zero if none were taken
    pub fn latest(&self) -> T {
        self.latest
    }

    /// Minimum measurement, `T::max_value()` if none were taken
    pub fn min(&self) -> T {
        self.min
    }

    /// Maximum measurement, `T::min_value()` if none were taken
    pub fn max(&self) -> T {
        self.max
    }

    /// Sum of all measurements
    pub fn sum(&self) -> T {
        self.sum
    }

    /// Sum of the squares of all measurements
    pub fn sum_of_squares(&self) -> T::Squared {
        self.sum_of_squares
    }

    /// Arithmetic mean, zero if no measurements were taken
    pub fn mean(&self) -> T {
        self.sum.div_count(self.denominator())
    }

    /// Population variance, `sum_of_squares / n - (sum / n)²`
    pub fn variance(&self) -> T::Squared {
        let n = self.denominator();
        self.sum_of_squares.div_count(n) - self.sum.div_count(n).square()
    }

    /// Population standard deviation, the square root of [`variance`](Self::variance)
    pub fn standard_deviation(&self) -> T {
        T::sqrt_of(self.variance())
    }

    #[inline]
    fn denominator(&self) -> u64 {
        self.count.max(1)
    }
}

impl<T: Measurement> Summary for Accumulator<T> {
    type Item = T;

    fn update(&mut self, item: &T) {
        self.insert(*item);
    }

    fn merge(&mut self, other: &Self) {
        Accumulator::merge(self, other);
    }

    fn clear(&mut self) {
        Accumulator::clear(self);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl<T: Measurement> From<T> for Accumulator<T> {
    fn from(measurement: T) -> Self {
        Self::with_measurement(measurement)
    }
}

impl<T: Measurement, const N: usize> From<[T; N]> for Accumulator<T> {
    fn from(measurements: [T; N]) -> Self {
        Self::from_measurements(measurements)
    }
}

impl<T: Measurement> FromIterator<T> for Accumulator<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_measurements(iter)
    }
}

impl<T: Measurement> Extend<T> for Accumulator<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T: Measurement> Extend<&'a T> for Accumulator<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.insert_all(iter.into_iter().copied());
    }
}

/// Merges the accumulators in iteration order.
impl<T: Measurement> Sum for Accumulator<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |mut total, shard| {
            total.merge(&shard);
            total
        })
    }
}

impl<'a, T: Measurement> Sum<&'a Accumulator<T>> for Accumulator<T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |mut total, shard| {
            total.merge(shard);
            total
        })
    }
}

/// Equal when count, latest, min, max and sum match. The sum of squares is
/// not compared.
impl<T: Measurement> PartialEq for Accumulator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count
            && self.latest == other.latest
            && self.min == other.min
            && self.max == other.max
            && self.sum == other.sum
    }
}

/// Lexicographic over `(count, latest, min, max, sum)`.
impl<T: Measurement> PartialOrd for Accumulator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.count.cmp(&other.count) {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        for (lhs, rhs) in [
            (self.latest, other.latest),
            (self.min, other.min),
            (self.max, other.max),
        ] {
            match lhs.partial_cmp(&rhs)? {
                Ordering::Equal => {}
                ord => return Some(ord),
            }
        }
        self.sum.partial_cmp(&other.sum)
    }
}
