//! # Runstats
//!
//! Constant-memory running statistics for streams of measurements.
//!
//! An [`Accumulator`] keeps the count, latest value, minimum, maximum, sum and
//! sum of squares of everything inserted into it, and derives the mean,
//! population variance and standard deviation from those. It never stores the
//! samples themselves, so memory use is fixed regardless of population size.
//!
//! ## Quick Start
//!
//! ```rust
//! use runstats::prelude::*;
//!
//! let mut latency = Accumulator::new();
//! for millis in [12.0, 15.0, 11.0, 14.0] {
//!     latency.insert(millis);
//! }
//! println!("mean {} ms, stddev {} ms", latency.mean(), latency.standard_deviation());
//! ```
//!
//! ## Distributed Computing
//!
//! Accumulators merge in O(1), so partitions of a stream can be summarised by
//! independent workers and combined afterwards:
//!
//! ```rust
//! use runstats::statistics::Accumulator;
//!
//! let mut worker1 = Accumulator::new();
//! let mut worker2 = Accumulator::new();
//!
//! // Each worker processes its partition
//! worker1.insert_all([1_u64, 2]);
//! worker2.insert_all([3_u64, 4]);
//!
//! // Merge results
//! worker1.merge(&worker2);
//! assert_eq!(worker1.sum(), 10);
//! ```
//!
//! ## Measurement Types
//!
//! Any type implementing [`Measurement`] can be accumulated. All primitive
//! integers and floats are supported out of the box; unit-carrying quantities
//! implement the trait themselves and may square into a distinct type.
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support. Without it the crate is
//!   `no_std` and uses `libm` for square roots.
//! - `serde`: Enable serialization
//! - `tracing`: Trace-level events when accumulators are merged or cleared
//! - `legacy-extrema`: Only check the maximum when an inserted value is not a
//!   new minimum (`if x < min {..} else if x > max {..}`)

#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod math;

pub mod measurement;
pub mod statistics;
pub mod traits;

pub mod prelude {
    pub use crate::measurement::{DivCount, Measurement};
    pub use crate::statistics::Accumulator;
    pub use crate::traits::*;
}

pub use measurement::Measurement;
pub use statistics::Accumulator;
