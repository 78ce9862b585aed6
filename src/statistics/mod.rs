//! Statistical summaries for streaming data
//!
//! This module provides algorithms for computing statistics over streams
//! in a single pass with constant memory.
//!
//! # Example
//!
//! ```
//! use runstats::statistics::Accumulator;
//!
//! let mut stats = Accumulator::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     stats.insert(value);
//! }
//!
//! println!("Mean: {}", stats.mean());
//! println!("Stddev: {}", stats.standard_deviation());
//! println!("Min: {}", stats.min());
//! println!("Max: {}", stats.max());
//! ```

mod accumulator;

pub use accumulator::Accumulator;
