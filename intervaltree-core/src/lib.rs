//! Half-open interval value type for interval indexing structures.
//!
//! This crate provides [`Interval`](models::Interval), an immutable `[begin, end)` range
//! over any ordered, subtractable domain (integers, floats and, with the `chrono` feature,
//! dates and timestamps) with an optional payload. It is the atomic unit that interval
//! trees and query engines store, sort and test against each other.
//!
//! ## Features
//!
//! - **Overlap tests** against points, ranges and other intervals, plus overlap sizes
//! - **Gap distances** between intervals or between an interval and a point
//! - **Containment** and range-equality predicates
//! - **A total order** for sorting and balancing, stable even over heterogeneous payloads
//! - **Directional predicates** (`lt`, `le`, `gt`, `ge`) that refuse null intervals
//! - **A textual form** that parses back into an equal interval
//!
//! ## Quick Start
//!
//! ```rust
//! use intervaltree_core::models::{Interval, Query};
//!
//! let a: Interval<u32, &str> = Interval::with_data(100, 200, "peak1");
//! let b: Interval<u32, &str> = Interval::with_data(150, 300, "peak2");
//!
//! assert!(a.overlaps(&b));
//! assert_eq!(a.overlap_size(&b), 50);
//! assert_eq!(a.distance_to(Query::Point(350)), 150);
//!
//! // directional predicates fail on empty intervals
//! let empty: Interval<u32, &str> = Interval::new(10, 10);
//! assert!(empty.lt(&a).is_err());
//! assert!(a.lt(&Interval::<u32>::new(200, 250)).unwrap());
//! ```
//!
//! ## Sorting
//!
//! [`Interval::compare`](models::Interval::compare) is a three-way comparator usable with
//! any sort: begins first, then ends, then payloads.
//!
//! ```rust
//! use intervaltree_core::models::Interval;
//! use serde_json::{Value, json};
//!
//! let mut intervals: Vec<Interval<i32, Value>> = vec![
//!     Interval::with_data(1, 3, json!("label")),
//!     Interval::with_data(1, 3, json!(7)),
//!     Interval::new(0, 9),
//! ];
//! intervals.sort_by(Interval::compare);
//!
//! assert_eq!(intervals[0], Interval::new(0, 9));
//! assert_eq!(intervals[1].data(), Some(&json!(7)));
//! ```

pub mod errors;
pub mod models;
pub mod repr;

// re-exports
pub use self::errors::{IntervalError, Result};
pub use self::models::{Coordinate, Interval, Payload, Query};
